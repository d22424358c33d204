//! Data model for modules, cut parts and projects.

mod module;
mod part;
mod project;

pub use module::{
    derive_hardware_defaults, DoorType, HandleType, HardwareDefaults, ModuleSpec, ModuleType,
};
pub use part::{CutPart, CutlistResult, HardwareCounts, MaterialClass, PartKind, SheetUsage};
pub use project::{FinancialInputs, Project, ProjectFinancials, ProjectModule};
