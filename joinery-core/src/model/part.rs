//! Cut parts and the per-module cutlist result.

use serde::{Deserialize, Serialize};

use crate::config::{PANEL_THICKNESS_MM, THIN_PANEL_THICKNESS_MM};

/// Sheet stock a part is cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaterialClass {
    /// 15mm structural panel.
    #[default]
    Thick,
    /// 6mm back panel and drawer bottom stock.
    Thin,
}

impl MaterialClass {
    /// Stock thickness in mm.
    pub fn thickness_mm(&self) -> f64 {
        match self {
            MaterialClass::Thick => PANEL_THICKNESS_MM,
            MaterialClass::Thin => THIN_PANEL_THICKNESS_MM,
        }
    }
}

impl std::fmt::Display for MaterialClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}mm", self.thickness_mm())
    }
}

/// Semantic label of a cut part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartKind {
    SidePanel,
    BottomPanel,
    TopPanel,
    StretcherRail,
    Shelf,
    Divider,
    BackPanel,
    DrawerFront,
    DrawerBoxSide,
    DrawerBoxEnd,
    DrawerBottom,
    Door,
}

impl PartKind {
    /// Display name used in cutlists.
    pub fn name(&self) -> &'static str {
        match self {
            PartKind::SidePanel => "Side Panel",
            PartKind::BottomPanel => "Bottom Panel",
            PartKind::TopPanel => "Top Panel",
            PartKind::StretcherRail => "Stretcher Rail",
            PartKind::Shelf => "Shelf",
            PartKind::Divider => "Divider",
            PartKind::BackPanel => "Back Panel",
            PartKind::DrawerFront => "Drawer Front",
            PartKind::DrawerBoxSide => "Drawer Box Side",
            PartKind::DrawerBoxEnd => "Drawer Box End",
            PartKind::DrawerBottom => "Drawer Bottom",
            PartKind::Door => "Door",
        }
    }

    /// Material the part is cut from.
    pub fn material(&self) -> MaterialClass {
        match self {
            PartKind::BackPanel | PartKind::DrawerBottom => MaterialClass::Thin,
            _ => MaterialClass::Thick,
        }
    }
}

impl std::fmt::Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One physical piece to be cut from stock. Dimensions in mm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutPart {
    pub kind: PartKind,
    pub name: String,
    pub quantity: u32,
    pub width: f64,
    pub height: f64,
    pub material: MaterialClass,
}

impl CutPart {
    /// Create a part, taking name and material from its kind.
    ///
    /// Negative dimensions are clamped to zero so degenerate input yields
    /// zero-area parts instead of subtracting area.
    pub fn new(kind: PartKind, quantity: u32, width: f64, height: f64) -> Self {
        Self {
            kind,
            name: kind.name().to_string(),
            quantity,
            width: clamp_dimension(width),
            height: clamp_dimension(height),
            material: kind.material(),
        }
    }

    /// Area of a single piece in mm².
    pub fn unit_area_mm2(&self) -> f64 {
        self.width * self.height
    }

    /// Area of all pieces in mm².
    pub fn area_mm2(&self) -> f64 {
        self.unit_area_mm2() * self.quantity as f64
    }
}

fn clamp_dimension(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Fractional stock sheets needed per material, waste included.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SheetUsage {
    pub thick_sheets: f64,
    pub thin_sheets: f64,
}

impl SheetUsage {
    /// Scale both counts, e.g. by a module quantity.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            thick_sheets: self.thick_sheets * factor,
            thin_sheets: self.thin_sheets * factor,
        }
    }

    /// Whole sheets to buy. Rounding happens only here.
    pub fn purchase_sheets(&self) -> (u32, u32) {
        (
            self.thick_sheets.ceil() as u32,
            self.thin_sheets.ceil() as u32,
        )
    }
}

impl std::ops::Add for SheetUsage {
    type Output = SheetUsage;

    fn add(self, other: SheetUsage) -> SheetUsage {
        SheetUsage {
            thick_sheets: self.thick_sheets + other.thick_sheets,
            thin_sheets: self.thin_sheets + other.thin_sheets,
        }
    }
}

/// Hinges, slide pairs and handles for one module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HardwareCounts {
    pub hinges: u32,
    pub slides: u32,
    pub handles: u32,
}

impl HardwareCounts {
    /// Multiply every count, e.g. by a module quantity.
    pub fn scaled(&self, factor: u32) -> Self {
        Self {
            hinges: self.hinges.saturating_mul(factor),
            slides: self.slides.saturating_mul(factor),
            handles: self.handles.saturating_mul(factor),
        }
    }
}

impl std::ops::Add for HardwareCounts {
    type Output = HardwareCounts;

    fn add(self, other: HardwareCounts) -> HardwareCounts {
        HardwareCounts {
            hinges: self.hinges.saturating_add(other.hinges),
            slides: self.slides.saturating_add(other.slides),
            handles: self.handles.saturating_add(other.handles),
        }
    }
}

/// Engine output for one module.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CutlistResult {
    pub parts: Vec<CutPart>,
    pub thick_sheet_count: f64,
    pub thin_sheet_count: f64,
    pub hinge_count: u32,
    pub slide_count: u32,
    pub handle_count: u32,
    /// Sheets plus hardware, in the shop's currency.
    pub material_cost: f64,
}

impl CutlistResult {
    /// Sheet counts as a [`SheetUsage`].
    pub fn sheet_usage(&self) -> SheetUsage {
        SheetUsage {
            thick_sheets: self.thick_sheet_count,
            thin_sheets: self.thin_sheet_count,
        }
    }

    /// Hardware counts as a [`HardwareCounts`].
    pub fn hardware(&self) -> HardwareCounts {
        HardwareCounts {
            hinges: self.hinge_count,
            slides: self.slide_count,
            handles: self.handle_count,
        }
    }

    /// Total number of pieces to cut.
    pub fn piece_count(&self) -> u32 {
        self.parts.iter().map(|p| p.quantity).sum()
    }

    /// Parts with the given kind.
    pub fn parts_of(&self, kind: PartKind) -> impl Iterator<Item = &CutPart> {
        self.parts.iter().filter(move |p| p.kind == kind)
    }

    /// Number of pieces with the given kind.
    pub fn quantity_of(&self, kind: PartKind) -> u32 {
        self.parts_of(kind).map(|p| p.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_part_takes_name_and_material_from_kind() {
        let back = CutPart::new(PartKind::BackPanel, 1, 600.0, 720.0);
        assert_eq!(back.name, "Back Panel");
        assert_eq!(back.material, MaterialClass::Thin);
        assert_eq!(back.material.to_string(), "6mm");

        let side = CutPart::new(PartKind::SidePanel, 2, 550.0, 720.0);
        let result = CutlistResult {
            parts: vec![back.clone(), side.clone()],
            ..Default::default()
        };
        assert_eq!(result.piece_count(), 3);
        assert_eq!(result.quantity_of(PartKind::SidePanel), 2);
        assert_eq!(side.material, MaterialClass::Thick);
        assert_eq!(side.area_mm2(), 2.0 * 550.0 * 720.0);
    }

    #[test]
    fn test_negative_dimensions_clamp_to_zero() {
        let part = CutPart::new(PartKind::Door, 2, -40.0, 500.0);
        assert_eq!(part.width, 0.0);
        assert_eq!(part.area_mm2(), 0.0);

        let part = CutPart::new(PartKind::Door, 1, f64::NAN, 500.0);
        assert_eq!(part.width, 0.0);
    }

    #[test]
    fn test_purchase_sheets_round_up() {
        let usage = SheetUsage {
            thick_sheets: 1.02,
            thin_sheets: 0.0,
        };
        assert_eq!(usage.purchase_sheets(), (2, 0));

        let total = usage + usage.scaled(2.0);
        assert!((total.thick_sheets - 3.06).abs() < 1e-9);
    }

    #[test]
    fn test_hardware_scaled_and_added() {
        let hw = HardwareCounts {
            hinges: 4,
            slides: 2,
            handles: 3,
        };
        assert_eq!(
            hw.scaled(2) + hw,
            HardwareCounts {
                hinges: 12,
                slides: 6,
                handles: 9
            }
        );
    }
}
