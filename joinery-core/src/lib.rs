//! joinery-core - Cutlist and pricing engine for cabinet and furniture projects.
//!
//! Given a module's type, size and fittings, the engine derives the parts
//! to cut, the stock sheets they need, the hardware, and a material cost.
//! The pricing calculator turns the aggregate cost plus shop time into a
//! suggested sale price using a markup-on-price formula.
//!
//! # Example
//!
//! ```
//! use joinery_core::{calculate_cutlist, ModuleSpec, ModuleType, ShopSettings};
//!
//! let spec = ModuleSpec::new(ModuleType::BaseCabinet, 60.0, 72.0, 55.0).with_fronts(1, 2);
//! let result = calculate_cutlist(&spec, &ShopSettings::default());
//! assert_eq!(result.slide_count, 2);
//! assert!(result.material_cost > 0.0);
//! ```

pub mod config;
pub mod cutlist;
pub mod error;
pub mod estimate;
pub mod generator;
pub mod loader;
pub mod model;
pub mod pricing;
pub mod validation;

// Re-exports for convenience
pub use config::ShopSettings;
pub use cutlist::calculate_cutlist;
pub use error::{ErrorCode, EstimateError, Result};
pub use estimate::{estimate_project, ModuleEstimate, ProjectEstimate};
pub use generator::generate_report;
pub use loader::{load_project, load_settings, parse_project, parse_settings};
pub use model::{
    derive_hardware_defaults, CutPart, CutlistResult, DoorType, FinancialInputs, HandleType,
    MaterialClass, ModuleSpec, ModuleType, PartKind, Project, ProjectFinancials, ProjectModule,
};
pub use pricing::{calculate_financials, hourly_rate};
pub use validation::{validate_project, ValidationResult};

/// Load a project file and estimate it.
///
/// This is the main high-level function:
/// 1. Load the project (and settings, when given)
/// 2. Validate, logging warnings and errors
/// 3. Run the cutlist engine per module and price the total
///
/// Validation problems are logged but do not stop the estimate; the
/// engine degrades to zero-sized output on nonsensical input.
pub fn estimate_project_file(
    project_path: &std::path::Path,
    settings_path: Option<&std::path::Path>,
) -> Result<(Project, ProjectEstimate)> {
    let project = load_project(project_path)?;
    if project.modules.is_empty() {
        return Err(EstimateError::NoModules {
            project: project.name.clone(),
        });
    }

    let settings = match settings_path {
        Some(path) => load_settings(path)?,
        None => ShopSettings::default(),
    };

    let validation = validate_project(&project);
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }
    for error in &validation.errors {
        tracing::error!("{}", error);
    }

    let estimate = estimate_project(&project, &settings);
    Ok((project, estimate))
}
