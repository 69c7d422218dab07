//! CMS admin - interactive building blocks of the CMS administration screens.
//!
//! - [`annotator`]: polygon region drawing over an image, used for hotspot
//!   and annotation fields
//! - [`permission`]: conversion between role permission lists, the
//!   permission grid and its form state

pub mod annotator;
pub mod background;
pub mod config;
pub mod geometry;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod permission;

pub use annotator::{RegionAnnotator, RegionEditor, RegionId, RegionMap};
pub use background::BackgroundImage;
pub use config::{AppConfig, LogLevel};
pub use geometry::{CanvasGeometry, Point};
