//! Carcass, front and drawer box decomposition.
//!
//! Geometry is worked out in millimeters:
//! 1. Carcass: two sides, a bottom between them, and a top closure
//!    (stretcher rails on base cabinets, a solid top otherwise)
//! 2. Interior: shelves split into bays by vertical dividers
//! 3. Back panel in thin stock
//! 4. Drawers: fronts plus a box per drawer, each reserving front height
//! 5. Doors share the front height left after the drawers

use crate::config::{
    DRAWER_BOX_DEPTH_CLEARANCE_MM, DRAWER_BOX_HEIGHT_MM, DRAWER_FRONT_HEIGHT_MM,
    DRAWER_OVERLAY_MM, DRAWER_SLIDE_CLEARANCE_MM, FRONT_GAP_MM, PANEL_THICKNESS_MM,
    SHELF_SETBACK_MM, STRETCHER_RAIL_COUNT, STRETCHER_RAIL_DEPTH_MM,
};
use crate::model::{CutPart, ModuleSpec, PartKind};

/// Width between the two side panels.
pub fn internal_width_mm(spec: &ModuleSpec) -> f64 {
    let (w, _, _) = spec.dimensions_mm();
    w - 2.0 * PANEL_THICKNESS_MM
}

/// Front height left for doors once drawer fronts are reserved.
pub fn door_budget_mm(spec: &ModuleSpec) -> f64 {
    let (_, h, _) = spec.dimensions_mm();
    h - spec.drawer_count as f64 * DRAWER_FRONT_HEIGHT_MM
}

/// Height of each door leaf, clamped at zero.
pub fn door_height_mm(spec: &ModuleSpec) -> f64 {
    (door_budget_mm(spec) - FRONT_GAP_MM).max(0.0)
}

/// Expand a module into its list of parts.
///
/// Order is stable: carcass, interior, back, drawers, doors.
pub fn generate_parts(spec: &ModuleSpec) -> Vec<CutPart> {
    let mut parts = Vec::new();

    push_carcass(&mut parts, spec);
    push_interior(&mut parts, spec);

    if spec.has_back_panel {
        let (w, h, _) = spec.dimensions_mm();
        parts.push(CutPart::new(PartKind::BackPanel, 1, w, h));
    }

    push_drawers(&mut parts, spec);
    push_doors(&mut parts, spec);

    parts
}

fn push_carcass(parts: &mut Vec<CutPart>, spec: &ModuleSpec) {
    let (_, h, d) = spec.dimensions_mm();
    let internal_width = internal_width_mm(spec);

    parts.push(CutPart::new(PartKind::SidePanel, 2, d, h));
    parts.push(CutPart::new(PartKind::BottomPanel, 1, d, internal_width));

    if spec.module_type.uses_stretcher_rails() {
        parts.push(CutPart::new(
            PartKind::StretcherRail,
            STRETCHER_RAIL_COUNT,
            STRETCHER_RAIL_DEPTH_MM,
            internal_width,
        ));
    } else {
        parts.push(CutPart::new(PartKind::TopPanel, 1, d, internal_width));
    }
}

fn push_interior(parts: &mut Vec<CutPart>, spec: &ModuleSpec) {
    let (_, h, d) = spec.dimensions_mm();
    let internal_width = internal_width_mm(spec);
    let dividers = spec.vertical_divider_count;
    let setback_depth = d - SHELF_SETBACK_MM;

    if spec.shelf_count > 0 {
        let bays = dividers.saturating_add(1);
        let shelf_width =
            (internal_width - dividers as f64 * PANEL_THICKNESS_MM) / bays as f64;
        parts.push(CutPart::new(
            PartKind::Shelf,
            spec.shelf_count.saturating_mul(bays),
            shelf_width,
            setback_depth,
        ));
    }

    if dividers > 0 {
        // Loses the top and bottom thickness even when the top is rails.
        let divider_height = h - 2.0 * PANEL_THICKNESS_MM;
        parts.push(CutPart::new(
            PartKind::Divider,
            dividers,
            setback_depth,
            divider_height,
        ));
    }
}

fn push_drawers(parts: &mut Vec<CutPart>, spec: &ModuleSpec) {
    let drawers = spec.drawer_count;
    if drawers == 0 {
        return;
    }

    let (_, _, d) = spec.dimensions_mm();
    let internal_width = internal_width_mm(spec);
    let box_depth = d - DRAWER_BOX_DEPTH_CLEARANCE_MM;
    let drawer_internal_width = internal_width - DRAWER_SLIDE_CLEARANCE_MM;

    parts.push(CutPart::new(
        PartKind::DrawerFront,
        drawers,
        internal_width + DRAWER_OVERLAY_MM,
        DRAWER_FRONT_HEIGHT_MM - FRONT_GAP_MM,
    ));
    parts.push(CutPart::new(
        PartKind::DrawerBoxSide,
        drawers.saturating_mul(2),
        box_depth,
        DRAWER_BOX_HEIGHT_MM,
    ));
    parts.push(CutPart::new(
        PartKind::DrawerBoxEnd,
        drawers.saturating_mul(2),
        drawer_internal_width - 2.0 * PANEL_THICKNESS_MM,
        DRAWER_BOX_HEIGHT_MM,
    ));

    // Drawer bottoms come out of the same thin stock as the back panel.
    if spec.has_back_panel {
        parts.push(CutPart::new(
            PartKind::DrawerBottom,
            drawers,
            drawer_internal_width,
            box_depth,
        ));
    }
}

fn push_doors(parts: &mut Vec<CutPart>, spec: &ModuleSpec) {
    let doors = spec.door_count;
    if doors == 0 {
        return;
    }

    let (w, _, _) = spec.dimensions_mm();
    let door_width = w / doors as f64 - FRONT_GAP_MM;
    parts.push(CutPart::new(
        PartKind::Door,
        doors,
        door_width,
        door_height_mm(spec),
    ));
}
