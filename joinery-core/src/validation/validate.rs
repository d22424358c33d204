//! Input checks for modules and projects.
//!
//! The engine accepts anything; these checks are for the layer in front
//! of it, which decides whether to reject input or show warnings.

use crate::config::LOW_MARGIN_WARNING_PERCENT;
use crate::cutlist::door_height_mm;
use crate::model::{FinancialInputs, HandleType, ModuleSpec, Project};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate a single module. Messages are prefixed with `label`.
pub fn validate_module(spec: &ModuleSpec, label: &str) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for (name, value) in [
        ("width", spec.width),
        ("height", spec.height),
        ("depth", spec.depth),
    ] {
        if !value.is_finite() || value <= 0.0 {
            result.add_error(format!("{}: Invalid {} ({} cm)", label, name, value));
        }
    }

    if spec.door_count > 0 && door_height_mm(spec) <= 0.0 {
        result.add_warning(format!(
            "{}: {} drawer(s) use the full front height, doors will have no height",
            label, spec.drawer_count
        ));
    }

    if spec.handle_type == HandleType::Touch && spec.handle_count > 0 {
        result.add_warning(format!(
            "{}: Touch-open fronts with {} handle(s)",
            label, spec.handle_count
        ));
    }

    if spec.slide_count != spec.drawer_count {
        result.add_warning(format!(
            "{}: {} slide pair(s) for {} drawer(s)",
            label, spec.slide_count, spec.drawer_count
        ));
    }

    result
}

/// Validate the pricing inputs.
pub fn validate_financials(inputs: &FinancialInputs) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for (name, value) in [
        ("materials cost", inputs.materials_cost),
        ("production days", inputs.production_days),
        ("assembly days", inputs.assembly_days),
        ("freight cost", inputs.freight_cost),
        ("margin", inputs.margin_percent),
        ("tax", inputs.tax_percent),
        ("carpenter commission", inputs.carpenter_commission_percent),
    ] {
        if !value.is_finite() || value < 0.0 {
            result.add_error(format!("Invalid {}: {}", name, value));
        }
    }

    let percent_sum = inputs.percent_sum();
    if percent_sum >= 100.0 {
        result.add_error(format!(
            "Margin, tax and commission add up to {}%, no price can cover cost",
            percent_sum
        ));
    } else if inputs.margin_percent < LOW_MARGIN_WARNING_PERCENT {
        result.add_warning(format!("Margin too low: {}%", inputs.margin_percent));
    }

    result
}

/// Validate every module and the pricing inputs of a project.
pub fn validate_project(project: &Project) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if project.modules.is_empty() {
        result.add_warning(format!("Project '{}' has no modules", project.name));
    }

    for (idx, module) in project.modules.iter().enumerate() {
        let label = format!("Module {} ({})", idx + 1, module.label);
        if module.quantity == 0 {
            result.add_warning(format!("{}: Quantity is zero", label));
        }
        result.merge(validate_module(&module.spec, &label));
    }

    // Materials are computed, so only the entered fields are checked here.
    result.merge(validate_financials(&project.financial_inputs(0.0)));

    result
}
