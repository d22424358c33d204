//! Project and shop settings loading from JSON documents.

use crate::config::ShopSettings;
use crate::error::{EstimateError, Result};
use crate::model::Project;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Parse a project from JSON text.
pub fn parse_project(content: &str) -> Result<Project> {
    parse_json(content, "project")
}

/// Parse shop settings from JSON text.
pub fn parse_settings(content: &str) -> Result<ShopSettings> {
    parse_json(content, "settings")
}

/// Load a project file.
pub fn load_project(path: &Path) -> Result<Project> {
    let content = read_input(path)?;
    let project: Project = parse_json(&content, &path.display().to_string())?;
    tracing::debug!(
        path = %path.display(),
        modules = project.modules.len(),
        "project loaded"
    );
    Ok(project)
}

/// Load a shop settings file.
pub fn load_settings(path: &Path) -> Result<ShopSettings> {
    let content = read_input(path)?;
    parse_json(&content, &path.display().to_string())
}

fn read_input(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(EstimateError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(EstimateError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    Ok(content)
}

fn parse_json<T: DeserializeOwned>(content: &str, source_name: &str) -> Result<T> {
    serde_json::from_str(content).map_err(|e| EstimateError::InvalidJson {
        source_name: source_name.to_string(),
        message: e.to_string(),
    })
}
