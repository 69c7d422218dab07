//! cms_ui - drawing and input vocabulary for the CMS admin canvas widgets.
//!
//! This crate has no rendering backend of its own. Widgets describe what to
//! draw as an [`Overlay`] and hand it to a [`Canvas`] implemented by the host.

mod callback;
mod canvas;
mod color;
mod event;
mod overlay;

pub use callback::{Subscribers, Subscription, SubscriptionId};
pub use canvas::{Canvas, DrawCommand, NullCanvas, RecordingCanvas};
pub use color::Color;
pub use event::{Event, Key, Modifiers, Point};
pub use overlay::{Overlay, OverlayItem, OverlayShape};

