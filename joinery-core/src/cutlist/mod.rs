//! Cutlist engine: module spec to parts, sheets, hardware and cost.

mod cost;
mod hardware;
mod parts;
mod sheets;

pub use cost::{material_cost, resolve_unit_prices, UnitPrices};
pub use hardware::{hardware_counts, hinges_per_door};
pub use parts::{door_budget_mm, door_height_mm, generate_parts, internal_width_mm};
pub use sheets::{area_by_material, sheet_usage, sheets_for_area};

use crate::config::ShopSettings;
use crate::model::{CutlistResult, ModuleSpec};

/// Run the full engine for one module.
///
/// Total over its input: degenerate dimensions or counts produce
/// zero-area parts and zero quantities, never an error.
pub fn calculate_cutlist(spec: &ModuleSpec, settings: &ShopSettings) -> CutlistResult {
    let parts = generate_parts(spec);
    let usage = sheet_usage(&parts);
    let hardware = hardware_counts(spec);
    let prices = resolve_unit_prices(spec, settings);
    let cost = material_cost(&usage, &hardware, &prices);

    tracing::debug!(
        module = %spec.module_type,
        parts = parts.len(),
        thick_sheets = usage.thick_sheets,
        thin_sheets = usage.thin_sheets,
        hinges = hardware.hinges,
        cost,
        "cutlist calculated"
    );

    CutlistResult {
        parts,
        thick_sheet_count: usage.thick_sheets,
        thin_sheet_count: usage.thin_sheets,
        hinge_count: hardware.hinges,
        slide_count: hardware.slides,
        handle_count: hardware.handles,
        material_cost: cost,
    }
}
