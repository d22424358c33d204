//! Project-level aggregation of module cutlists and pricing.

use serde::{Deserialize, Serialize};

use crate::config::ShopSettings;
use crate::cutlist::calculate_cutlist;
use crate::model::{CutlistResult, HardwareCounts, Project, ProjectFinancials, SheetUsage};
use crate::pricing::calculate_with_settings;

/// Cutlist of one project line, with totals scaled by quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleEstimate {
    pub label: String,
    pub quantity: u32,
    /// Cutlist for a single copy of the module.
    pub cutlist: CutlistResult,
    pub line_cost: f64,
}

/// Everything the caller may persist for a project.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEstimate {
    pub modules: Vec<ModuleEstimate>,
    /// Fractional sheets across all modules.
    pub sheets: SheetUsage,
    /// Whole (thick, thin) sheets to buy.
    pub purchase_sheets: (u32, u32),
    pub hardware: HardwareCounts,
    /// Aggregate material cost, persisted as the estimated cost.
    pub estimated_cost: f64,
    pub financials: ProjectFinancials,
}

impl ProjectEstimate {
    pub fn suggested_price(&self) -> f64 {
        self.financials.suggested_price
    }
}

/// Run the engine for every module of a project and price the total.
pub fn estimate_project(project: &Project, settings: &ShopSettings) -> ProjectEstimate {
    let mut sheets = SheetUsage::default();
    let mut hardware = HardwareCounts::default();
    let mut estimated_cost = 0.0;

    let modules: Vec<ModuleEstimate> = project
        .modules
        .iter()
        .map(|module| {
            let cutlist = calculate_cutlist(&module.spec, settings);
            let quantity = module.quantity;
            let line_cost = cutlist.material_cost * quantity as f64;

            sheets = sheets + cutlist.sheet_usage().scaled(quantity as f64);
            hardware = hardware + cutlist.hardware().scaled(quantity);
            estimated_cost += line_cost;

            ModuleEstimate {
                label: module.label.clone(),
                quantity,
                cutlist,
                line_cost,
            }
        })
        .collect();

    let financials = calculate_with_settings(&project.financial_inputs(estimated_cost), settings);

    tracing::info!(
        project = %project.name,
        modules = modules.len(),
        estimated_cost,
        suggested_price = financials.suggested_price,
        "project estimated"
    );

    ProjectEstimate {
        modules,
        purchase_sheets: sheets.purchase_sheets(),
        sheets,
        hardware,
        estimated_cost,
        financials,
    }
}
