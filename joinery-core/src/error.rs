//! Error types for loading estimation inputs.
//!
//! The cutlist and pricing computations are total and never fail; only
//! reading and decoding project or settings files produce errors.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for input processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// Malformed input document (-3)
    InvalidInput = -3,
    /// Project has no modules (E201)
    NoModules = 201,
}

/// Main error type for the estimator.
#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Invalid JSON in {source_name}: {message}")]
    InvalidJson {
        source_name: String,
        message: String,
    },

    #[error("Project '{project}' has no modules")]
    NoModules { project: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EstimateError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EstimateError::FileNotFound { .. } => ErrorCode::FileNotFound,
            EstimateError::EmptyFile { .. } => ErrorCode::EmptyFile,
            EstimateError::InvalidJson { .. } => ErrorCode::InvalidInput,
            EstimateError::NoModules { .. } => ErrorCode::NoModules,
            EstimateError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for estimator operations.
pub type Result<T> = std::result::Result<T, EstimateError>;
