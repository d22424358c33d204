//! Unit price resolution and module material cost.

use serde::{Deserialize, Serialize};

use crate::config::{resolve_price, ShopSettings, PREMIUM_FINISH_MULTIPLIER};
use crate::model::{HardwareCounts, ModuleSpec, SheetUsage};

/// Prices used to cost one module.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UnitPrices {
    pub thick_sheet: f64,
    pub thin_sheet: f64,
    pub hinge: f64,
    pub slide: f64,
    pub handle: f64,
}

/// Resolve every unit price for a module.
///
/// The thick sheet price prefers the catalog selection, then the shop
/// default, then the hardcoded fallback; premium finishes raise the
/// catalog and standard prices by [`PREMIUM_FINISH_MULTIPLIER`]. The
/// slide price prefers the catalog slide model the same way.
pub fn resolve_unit_prices(spec: &ModuleSpec, settings: &ShopSettings) -> UnitPrices {
    let finish = if spec.is_premium_finish {
        PREMIUM_FINISH_MULTIPLIER
    } else {
        1.0
    };

    UnitPrices {
        thick_sheet: resolve_price(&[
            spec.catalog_sheet_price.map(|p| p * finish),
            Some(settings.sheet_price(spec.is_premium_finish)),
        ]),
        thin_sheet: settings.thin_sheet_price(),
        hinge: settings.hinge_price(),
        slide: resolve_price(&[spec.catalog_slide_price, Some(settings.slide_price())]),
        handle: settings.handle_price(),
    }
}

/// Cost of sheets and hardware.
pub fn material_cost(usage: &SheetUsage, hardware: &HardwareCounts, prices: &UnitPrices) -> f64 {
    usage.thick_sheets * prices.thick_sheet
        + usage.thin_sheets * prices.thin_sheet
        + hardware.hinges as f64 * prices.hinge
        + hardware.slides as f64 * prices.slide
        + hardware.handles as f64 * prices.handle
}
