//! Pipeline module - binning, WoE/IV scoring, and dataset loading

pub mod binning;
pub mod loader;
pub mod woe;

pub use binning::*;
pub use loader::*;
pub use woe::*;
