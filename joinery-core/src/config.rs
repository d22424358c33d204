//! Construction constants, price fallbacks and shop settings.

use serde::{Deserialize, Serialize};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Conversion factor: cm to mm. Module dimensions are entered in cm.
pub const CM_TO_MM: f64 = 10.0;

/// Structural panel thickness in mm.
pub const PANEL_THICKNESS_MM: f64 = 15.0;

/// Back panel and drawer bottom thickness in mm.
pub const THIN_PANEL_THICKNESS_MM: f64 = 6.0;

/// Depth of a stretcher rail on base cabinets.
pub const STRETCHER_RAIL_DEPTH_MM: f64 = 70.0;

/// Number of stretcher rails replacing the top panel of a base cabinet.
pub const STRETCHER_RAIL_COUNT: u32 = 2;

/// Shelves and dividers sit back from the front edge by this much.
pub const SHELF_SETBACK_MM: f64 = 20.0;

/// Front height reserved for each drawer.
pub const DRAWER_FRONT_HEIGHT_MM: f64 = 160.0;

/// Gap left around doors and drawer fronts.
pub const FRONT_GAP_MM: f64 = 3.0;

/// Extra width on drawer fronts overlaying the carcass.
pub const DRAWER_OVERLAY_MM: f64 = 10.0;

/// Height of the drawer box sides and ends.
pub const DRAWER_BOX_HEIGHT_MM: f64 = 120.0;

/// Drawer box depth is the module depth minus this.
pub const DRAWER_BOX_DEPTH_CLEARANCE_MM: f64 = 50.0;

/// Width lost to the pair of drawer slides.
pub const DRAWER_SLIDE_CLEARANCE_MM: f64 = 26.0;

/// Cutting-waste multiplier applied to the net part area.
pub const WASTE_FACTOR: f64 = 1.25;

/// Stock sheet length in mm.
pub const SHEET_LENGTH_MM: f64 = 2750.0;

/// Stock sheet width in mm.
pub const SHEET_WIDTH_MM: f64 = 1840.0;

/// Conversion factor: mm² to m².
pub const MM2_PER_M2: f64 = 1_000_000.0;

/// Sheet price multiplier for premium finishes.
pub const PREMIUM_FINISH_MULTIPLIER: f64 = 1.4;

/// Hinged doors below this height get two hinges.
pub const HINGE_TIER_LOW_MM: f64 = 900.0;

/// Hinged doors below this height get three hinges, four otherwise.
pub const HINGE_TIER_HIGH_MM: f64 = 1600.0;

/// Hinges (lift stays) per lift door, independent of height.
pub const LIFT_HINGES_PER_DOOR: u32 = 2;

/// Fallback price of a standard thick sheet.
pub const FALLBACK_SHEET_PRICE: f64 = 280.0;

/// Fallback price of a thin back-panel sheet.
pub const FALLBACK_THIN_SHEET_PRICE: f64 = 90.0;

/// Fallback price of one hinge.
pub const FALLBACK_HINGE_PRICE: f64 = 8.0;

/// Fallback price of one pair of drawer slides.
pub const FALLBACK_SLIDE_PRICE: f64 = 35.0;

/// Fallback price of one handle.
pub const FALLBACK_HANDLE_PRICE: f64 = 15.0;

/// Fallback working days per month.
pub const DEFAULT_WORKING_DAYS_PER_MONTH: f64 = 22.0;

/// Fallback working hours per day.
pub const DEFAULT_WORKING_HOURS_PER_DAY: f64 = 8.0;

/// Margins below this percentage are flagged by validation.
pub const LOW_MARGIN_WARNING_PERCENT: f64 = 10.0;

/// Area of one stock sheet in m².
pub fn sheet_area_m2() -> f64 {
    SHEET_LENGTH_MM * SHEET_WIDTH_MM / MM2_PER_M2
}

/// Convert a centimeter dimension to millimeters.
#[inline]
pub fn cm_to_mm(cm: f64) -> f64 {
    cm * CM_TO_MM
}

/// Return the first usable price in priority order.
///
/// A candidate is usable when it is present, finite and positive. The
/// chains built by callers always end in a hardcoded fallback, so an
/// empty result only happens for an empty or all-unset list, and is 0.
pub fn resolve_price(candidates: &[Option<f64>]) -> f64 {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|v| is_set(*v))
        .unwrap_or(0.0)
}

fn is_set(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn set_or_none(value: Option<f64>) -> Option<f64> {
    value.filter(|v| is_set(*v))
}

/// Shop-wide settings supplied by the settings provider.
///
/// Every field may be missing; accessors fall back to the constants above.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShopSettings {
    /// Explicit hourly shop rate. Takes priority over the fixed-cost derivation.
    pub hourly_rate: Option<f64>,
    /// Monthly fixed costs (rent, salaries, utilities).
    pub monthly_fixed_costs: Option<f64>,
    pub working_days_per_month: Option<f64>,
    pub working_hours_per_day: Option<f64>,
    pub sheet_price_standard: Option<f64>,
    pub sheet_price_premium: Option<f64>,
    pub sheet_price_thin: Option<f64>,
    pub hinge_price: Option<f64>,
    /// Price of one pair of drawer slides.
    pub slide_price: Option<f64>,
    pub handle_price: Option<f64>,
}

impl ShopSettings {
    /// Settings with nothing configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Working days per month, or the fallback.
    pub fn working_days_per_month(&self) -> f64 {
        resolve_price(&[
            self.working_days_per_month,
            Some(DEFAULT_WORKING_DAYS_PER_MONTH),
        ])
    }

    /// Working hours per day, or the fallback.
    pub fn working_hours_per_day(&self) -> f64 {
        resolve_price(&[
            self.working_hours_per_day,
            Some(DEFAULT_WORKING_HOURS_PER_DAY),
        ])
    }

    /// Configured hourly rate, ignoring unset or non-positive values.
    pub fn configured_hourly_rate(&self) -> Option<f64> {
        set_or_none(self.hourly_rate)
    }

    /// Configured monthly fixed costs, ignoring unset or non-positive values.
    pub fn configured_fixed_costs(&self) -> Option<f64> {
        set_or_none(self.monthly_fixed_costs)
    }

    /// Thick sheet price for the given finish tier, without a catalog selection.
    pub fn sheet_price(&self, premium: bool) -> f64 {
        if premium {
            resolve_price(&[
                self.sheet_price_premium,
                self.sheet_price_standard
                    .map(|p| p * PREMIUM_FINISH_MULTIPLIER),
                Some(FALLBACK_SHEET_PRICE * PREMIUM_FINISH_MULTIPLIER),
            ])
        } else {
            resolve_price(&[self.sheet_price_standard, Some(FALLBACK_SHEET_PRICE)])
        }
    }

    pub fn thin_sheet_price(&self) -> f64 {
        resolve_price(&[self.sheet_price_thin, Some(FALLBACK_THIN_SHEET_PRICE)])
    }

    pub fn hinge_price(&self) -> f64 {
        resolve_price(&[self.hinge_price, Some(FALLBACK_HINGE_PRICE)])
    }

    pub fn slide_price(&self) -> f64 {
        resolve_price(&[self.slide_price, Some(FALLBACK_SLIDE_PRICE)])
    }

    pub fn handle_price(&self) -> f64 {
        resolve_price(&[self.handle_price, Some(FALLBACK_HANDLE_PRICE)])
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a float is approximately zero.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }
}
