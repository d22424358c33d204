//! Cabinet module specification and the hardware-default sync rules.

use serde::{Deserialize, Serialize};

/// Kind of cabinet, which decides how the carcass is closed at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleType {
    /// Floor cabinet under a countertop: top closed by stretcher rails.
    #[default]
    BaseCabinet,
    /// Wall-hung cabinet.
    UpperCabinet,
    /// Full-height wardrobe.
    Wardrobe,
    /// Any other free-standing unit.
    Generic,
}

impl ModuleType {
    /// Base cabinets leave the top open for the countertop.
    pub fn uses_stretcher_rails(&self) -> bool {
        matches!(self, ModuleType::BaseCabinet)
    }
}

impl std::fmt::Display for ModuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModuleType::BaseCabinet => write!(f, "base cabinet"),
            ModuleType::UpperCabinet => write!(f, "upper cabinet"),
            ModuleType::Wardrobe => write!(f, "wardrobe"),
            ModuleType::Generic => write!(f, "generic"),
        }
    }
}

/// How the doors open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DoorType {
    #[default]
    Hinged,
    /// Sliding doors run on tracks and need no hinges.
    Sliding,
    /// Lift-up doors hang on a fixed number of lift stays.
    Lift,
}

impl std::fmt::Display for DoorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DoorType::Hinged => write!(f, "hinged"),
            DoorType::Sliding => write!(f, "sliding"),
            DoorType::Lift => write!(f, "lift"),
        }
    }
}

/// Handle style on doors and drawer fronts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HandleType {
    #[default]
    External,
    Profile,
    Integrated,
    /// Push-to-open, no handles at all.
    Touch,
}

impl std::fmt::Display for HandleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HandleType::External => write!(f, "external"),
            HandleType::Profile => write!(f, "profile"),
            HandleType::Integrated => write!(f, "integrated"),
            HandleType::Touch => write!(f, "touch"),
        }
    }
}

/// One cabinet or furniture unit to be cut and priced.
///
/// Dimensions are in centimeters. The engine trusts `slide_count` and
/// `handle_count` as given; use [`ModuleSpec::with_hardware_defaults`]
/// to sync them from the door and drawer counts first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModuleSpec {
    #[serde(rename = "type")]
    pub module_type: ModuleType,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub has_back_panel: bool,
    pub is_premium_finish: bool,
    pub drawer_count: u32,
    pub door_count: u32,
    pub shelf_count: u32,
    pub vertical_divider_count: u32,
    pub door_type: DoorType,
    /// Pairs of drawer runners.
    pub slide_count: u32,
    pub handle_count: u32,
    pub handle_type: HandleType,
    /// Unit price of the sheet material picked from the catalog.
    pub catalog_sheet_price: Option<f64>,
    /// Unit price of the slide model picked from the catalog.
    pub catalog_slide_price: Option<f64>,
}

impl Default for ModuleSpec {
    fn default() -> Self {
        Self {
            module_type: ModuleType::default(),
            width: 0.0,
            height: 0.0,
            depth: 0.0,
            has_back_panel: true,
            is_premium_finish: false,
            drawer_count: 0,
            door_count: 0,
            shelf_count: 0,
            vertical_divider_count: 0,
            door_type: DoorType::default(),
            slide_count: 0,
            handle_count: 0,
            handle_type: HandleType::default(),
            catalog_sheet_price: None,
            catalog_slide_price: None,
        }
    }
}

impl ModuleSpec {
    /// Create a module of the given type and size (cm) with no fittings.
    pub fn new(module_type: ModuleType, width: f64, height: f64, depth: f64) -> Self {
        Self {
            module_type,
            width,
            height,
            depth,
            has_back_panel: false,
            ..Default::default()
        }
    }

    /// Set door and drawer counts and re-sync slides and handles from them.
    pub fn with_fronts(mut self, door_count: u32, drawer_count: u32) -> Self {
        self.door_count = door_count;
        self.drawer_count = drawer_count;
        self.with_hardware_defaults()
    }

    /// Change the handle type, re-syncing the handle count.
    pub fn with_handle_type(mut self, handle_type: HandleType) -> Self {
        self.handle_type = handle_type;
        self.with_hardware_defaults()
    }

    /// Apply [`derive_hardware_defaults`] to this module.
    pub fn with_hardware_defaults(mut self) -> Self {
        let defaults = derive_hardware_defaults(
            self.drawer_count,
            self.door_count,
            self.handle_type,
        );
        self.slide_count = defaults.slide_count;
        self.handle_count = defaults.handle_count;
        self
    }

    /// Width, height and depth converted to millimeters.
    pub fn dimensions_mm(&self) -> (f64, f64, f64) {
        use crate::config::cm_to_mm;
        (cm_to_mm(self.width), cm_to_mm(self.height), cm_to_mm(self.depth))
    }

    /// Whether all three dimensions are positive and finite.
    pub fn has_valid_dimensions(&self) -> bool {
        [self.width, self.height, self.depth]
            .iter()
            .all(|d| d.is_finite() && *d > 0.0)
    }
}

/// Slide and handle counts derived from the door and drawer counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HardwareDefaults {
    pub slide_count: u32,
    pub handle_count: u32,
}

/// Default hardware counts for a set of fronts.
///
/// One slide pair per drawer, one handle per door and drawer, and no
/// handles at all for touch-open fronts. Callers run this when counts
/// change and may still override the results afterwards.
pub fn derive_hardware_defaults(
    drawer_count: u32,
    door_count: u32,
    handle_type: HandleType,
) -> HardwareDefaults {
    let handle_count = match handle_type {
        HandleType::Touch => 0,
        _ => door_count.saturating_add(drawer_count),
    };

    HardwareDefaults {
        slide_count: drawer_count,
        handle_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_derive_defaults_counts_fronts() {
        let defaults = derive_hardware_defaults(3, 2, HandleType::External);
        assert_eq!(
            defaults,
            HardwareDefaults {
                slide_count: 3,
                handle_count: 5
            }
        );
    }

    #[test]
    fn test_derive_defaults_touch_has_no_handles() {
        let defaults = derive_hardware_defaults(4, 2, HandleType::Touch);
        assert_eq!(defaults.handle_count, 0);
        assert_eq!(defaults.slide_count, 4);
    }

    #[test]
    fn test_with_fronts_syncs_then_allows_override() {
        let mut spec = ModuleSpec::new(ModuleType::BaseCabinet, 60.0, 72.0, 55.0).with_fronts(1, 2);
        assert_eq!(spec.slide_count, 2);
        assert_eq!(spec.handle_count, 3);

        spec.slide_count = 5;
        assert_eq!(spec.slide_count, 5);
        assert_eq!(spec.drawer_count, 2);
    }

    #[test]
    fn test_switching_to_touch_clears_handles() {
        let spec = ModuleSpec::new(ModuleType::Wardrobe, 100.0, 220.0, 60.0)
            .with_fronts(2, 0)
            .with_handle_type(HandleType::Touch);
        assert_eq!(spec.handle_count, 0);
    }

    #[test]
    fn test_deserialize_module_spec() {
        let json = r#"{
            "type": "upper-cabinet",
            "width": 80,
            "height": 70,
            "depth": 35,
            "doorCount": 2,
            "doorType": "lift",
            "handleType": "touch",
            "catalogSheetPrice": 310.5
        }"#;
        let spec: ModuleSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.module_type, ModuleType::UpperCabinet);
        assert_eq!(spec.door_type, DoorType::Lift);
        assert_eq!(spec.handle_type, HandleType::Touch);
        assert_eq!(spec.door_count, 2);
        assert_eq!(spec.catalog_sheet_price, Some(310.5));
        assert!(spec.has_back_panel);
        assert_eq!(spec.dimensions_mm(), (800.0, 700.0, 350.0));
    }

    #[test]
    fn test_has_valid_dimensions() {
        assert!(ModuleSpec::new(ModuleType::Generic, 1.0, 1.0, 1.0).has_valid_dimensions());
        assert!(!ModuleSpec::new(ModuleType::Generic, 0.0, 1.0, 1.0).has_valid_dimensions());
        assert!(!ModuleSpec::new(ModuleType::Generic, 10.0, -1.0, 1.0).has_valid_dimensions());
    }
}
