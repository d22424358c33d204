//! Project-level inputs and financial results.

use serde::{Deserialize, Serialize};

use super::ModuleSpec;

/// Time, expense and percentage inputs for pricing a project.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FinancialInputs {
    pub materials_cost: f64,
    pub production_days: f64,
    pub assembly_days: f64,
    pub freight_cost: f64,
    /// Profit as a percentage of the sale price.
    pub margin_percent: f64,
    /// Taxes as a percentage of the sale price.
    pub tax_percent: f64,
    /// Subcontracted carpenter's share of the sale price.
    pub carpenter_commission_percent: f64,
}

impl FinancialInputs {
    /// Sum of all sale-price percentages.
    pub fn percent_sum(&self) -> f64 {
        self.margin_percent + self.tax_percent + self.carpenter_commission_percent
    }
}

/// Priced breakdown of a project.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFinancials {
    pub total_hours: f64,
    pub hourly_rate: f64,
    pub shop_overhead_cost: f64,
    pub total_base_cost: f64,
    /// Zero when the percentages leave nothing to cover cost.
    pub suggested_price: f64,
    pub carpenter_commission_value: f64,
    pub profit: f64,
}

impl ProjectFinancials {
    /// Whether the price formula had to clamp to zero.
    pub fn is_clamped(&self) -> bool {
        self.suggested_price == 0.0 && self.total_base_cost > 0.0
    }
}

/// One line of a project: a module and how many identical copies to build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectModule {
    pub label: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    pub spec: ModuleSpec,
}

fn default_quantity() -> u32 {
    1
}

impl ProjectModule {
    pub fn new(label: impl Into<String>, spec: ModuleSpec) -> Self {
        Self {
            label: label.into(),
            quantity: 1,
            spec,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }
}

/// A client job made of several modules.
///
/// The aggregate material cost is computed from the modules, so only the
/// time, freight and percentage inputs are stored here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub client: Option<String>,
    pub modules: Vec<ProjectModule>,
    pub production_days: f64,
    pub assembly_days: f64,
    pub freight_cost: f64,
    pub margin_percent: f64,
    pub tax_percent: f64,
    pub carpenter_commission_percent: f64,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add a module line.
    pub fn add_module(&mut self, module: ProjectModule) {
        self.modules.push(module);
    }

    /// Pricing inputs for the given aggregate material cost.
    pub fn financial_inputs(&self, materials_cost: f64) -> FinancialInputs {
        FinancialInputs {
            materials_cost,
            production_days: self.production_days,
            assembly_days: self.assembly_days,
            freight_cost: self.freight_cost,
            margin_percent: self.margin_percent,
            tax_percent: self.tax_percent,
            carpenter_commission_percent: self.carpenter_commission_percent,
        }
    }
}
