//! Hinge, slide and handle quantities.

use crate::config::{HINGE_TIER_HIGH_MM, HINGE_TIER_LOW_MM, LIFT_HINGES_PER_DOOR};
use crate::model::{DoorType, HardwareCounts, ModuleSpec};

use super::parts::door_height_mm;

/// Hinges needed on one door of the given height.
///
/// Hinged doors step up with height (2 below 900mm, 3 below 1600mm, 4
/// above). Lift doors always take two stays. Sliding doors take none.
pub fn hinges_per_door(door_height_mm: f64, door_type: DoorType) -> u32 {
    match door_type {
        DoorType::Hinged => {
            if door_height_mm < HINGE_TIER_LOW_MM {
                2
            } else if door_height_mm < HINGE_TIER_HIGH_MM {
                3
            } else {
                4
            }
        }
        DoorType::Lift => LIFT_HINGES_PER_DOOR,
        DoorType::Sliding => 0,
    }
}

/// Hardware for one module.
///
/// Slide and handle counts are taken as given, never re-derived from
/// the drawer and door counts.
pub fn hardware_counts(spec: &ModuleSpec) -> HardwareCounts {
    let hinges = if spec.door_count > 0 {
        hinges_per_door(door_height_mm(spec), spec.door_type).saturating_mul(spec.door_count)
    } else {
        0
    };

    HardwareCounts {
        hinges,
        slides: spec.slide_count,
        handles: spec.handle_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HandleType, ModuleType};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hinged_tiers_and_boundaries() {
        assert_eq!(hinges_per_door(0.0, DoorType::Hinged), 2);
        assert_eq!(hinges_per_door(899.9, DoorType::Hinged), 2);
        assert_eq!(hinges_per_door(900.0, DoorType::Hinged), 3);
        assert_eq!(hinges_per_door(1599.9, DoorType::Hinged), 3);
        assert_eq!(hinges_per_door(1600.0, DoorType::Hinged), 4);
        assert_eq!(hinges_per_door(2400.0, DoorType::Hinged), 4);
    }

    #[test]
    fn test_lift_is_flat_and_sliding_is_zero() {
        for height in [300.0, 900.0, 1600.0, 2200.0] {
            assert_eq!(hinges_per_door(height, DoorType::Lift), 2);
            assert_eq!(hinges_per_door(height, DoorType::Sliding), 0);
        }
    }

    #[test]
    fn test_hinges_use_door_leaf_height() {
        // 800 - 3 = 797mm leaf
        let spec = ModuleSpec::new(ModuleType::Generic, 60.0, 80.0, 50.0).with_fronts(2, 0);
        assert_eq!(hardware_counts(&spec).hinges, 4);

        // 1000 - 3 = 997mm leaf
        let spec = ModuleSpec::new(ModuleType::Generic, 60.0, 100.0, 50.0).with_fronts(2, 0);
        assert_eq!(hardware_counts(&spec).hinges, 6);

        // 2000 - 3 = 1997mm leaf
        let spec = ModuleSpec::new(ModuleType::Wardrobe, 60.0, 200.0, 50.0).with_fronts(1, 0);
        assert_eq!(hardware_counts(&spec).hinges, 4);

        // Drawers shrink the doors: 1000 - 160 - 3 = 837mm leaf
        let spec = ModuleSpec::new(ModuleType::Generic, 60.0, 100.0, 50.0).with_fronts(1, 1);
        assert_eq!(hardware_counts(&spec).hinges, 2);
    }

    #[test]
    fn test_no_doors_no_hinges() {
        let spec = ModuleSpec::new(ModuleType::BaseCabinet, 60.0, 72.0, 55.0).with_fronts(0, 3);
        assert_eq!(hardware_counts(&spec).hinges, 0);
    }

    #[test]
    fn test_slides_and_handles_taken_as_given() {
        let spec = ModuleSpec {
            slide_count: 5,
            handle_count: 0,
            ..ModuleSpec::new(ModuleType::BaseCabinet, 60.0, 72.0, 55.0).with_fronts(1, 2)
        };
        let hw = hardware_counts(&spec);
        assert_eq!(hw.slides, 5);
        assert_eq!(hw.handles, 0);

        let spec = ModuleSpec {
            handle_count: 7,
            handle_type: HandleType::Touch,
            ..ModuleSpec::new(ModuleType::Generic, 60.0, 72.0, 55.0)
        };
        assert_eq!(hardware_counts(&spec).handles, 7);
    }
}
