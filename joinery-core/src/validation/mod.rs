//! Input validation module.

mod validate;

pub use validate::{validate_financials, validate_module, validate_project, ValidationResult};
