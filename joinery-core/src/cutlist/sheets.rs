//! Sheet-goods aggregation.

use crate::config::{sheet_area_m2, MM2_PER_M2, WASTE_FACTOR};
use crate::model::{CutPart, MaterialClass, SheetUsage};

/// Net part area per material, in m².
pub fn area_by_material(parts: &[CutPart]) -> (f64, f64) {
    let (thick, thin) = parts
        .iter()
        .fold((0.0, 0.0), |(thick, thin), part| match part.material {
            MaterialClass::Thick => (thick + part.area_mm2(), thin),
            MaterialClass::Thin => (thick, thin + part.area_mm2()),
        });
    (thick / MM2_PER_M2, thin / MM2_PER_M2)
}

/// Fractional sheets needed for an area, waste included.
pub fn sheets_for_area(area_m2: f64) -> f64 {
    area_m2 * WASTE_FACTOR / sheet_area_m2()
}

/// Fractional stock sheets per material class.
///
/// Counts stay fractional; only the purchasing layer rounds up.
pub fn sheet_usage(parts: &[CutPart]) -> SheetUsage {
    let (thick_m2, thin_m2) = area_by_material(parts);
    SheetUsage {
        thick_sheets: sheets_for_area(thick_m2),
        thin_sheets: sheets_for_area(thin_m2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;
    use crate::model::PartKind;

    #[test]
    fn test_area_split_by_material() {
        let parts = vec![
            CutPart::new(PartKind::SidePanel, 2, 500.0, 1000.0),
            CutPart::new(PartKind::BackPanel, 1, 1000.0, 1000.0),
        ];
        let (thick, thin) = area_by_material(&parts);
        assert!(approx_eq(thick, 1.0));
        assert!(approx_eq(thin, 1.0));
    }

    #[test]
    fn test_full_sheet_area_needs_waste_allowance() {
        assert!(approx_eq(sheets_for_area(5.06), 1.25));
        assert!(approx_eq(sheets_for_area(0.0), 0.0));
    }

    #[test]
    fn test_sheet_usage_generic_box() {
        // Sides 2 x 500 x 1000, bottom and top 500 x 970 each.
        let parts = vec![
            CutPart::new(PartKind::SidePanel, 2, 500.0, 1000.0),
            CutPart::new(PartKind::BottomPanel, 1, 500.0, 970.0),
            CutPart::new(PartKind::TopPanel, 1, 500.0, 970.0),
        ];
        let usage = sheet_usage(&parts);
        assert!(approx_eq(usage.thick_sheets, 1.97 * 1.25 / 5.06));
        assert_eq!(usage.thin_sheets, 0.0);
    }

    #[test]
    fn test_empty_parts_need_no_sheets() {
        let usage = sheet_usage(&[]);
        assert_eq!(usage, SheetUsage::default());
    }
}
