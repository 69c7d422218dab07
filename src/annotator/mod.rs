//! Interactive polygon region annotator.
//!
//! This module provides:
//! - [`RegionAnnotator`], the per-canvas state machine turning clicks into
//!   closed polygons keyed by sequential ids
//! - [`RegionEditor`], the command/query handle a hosting form field drives
//! - [`RegionMap`] persistence and polygon helpers

mod draft;
mod editor;
mod handle;
mod region;
mod render;

#[cfg(test)]
mod tests;

pub use draft::{DOUBLE_CLICK_TRAILING_POINTS, Draft, MIN_DOUBLE_CLICK_POINTS};
pub use editor::{AnnotatorState, RegionAnnotator};
pub use handle::RegionEditor;
pub use region::{MIN_REGION_POINTS, Region, RegionId, RegionMap, RegionsError};
pub use render::{AnnotatorStyle, build_overlay};
