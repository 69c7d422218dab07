//! Display list for shapes drawn on top of a background image.

use crate::Color;

/// Shape types that can be drawn as overlays.
///
/// All coordinates are in image space; the canvas is expected to be sized to
/// the image's intrinsic pixel dimensions.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayShape {
    /// A polygon or polyline defined by vertices.
    Polygon {
        /// Vertices in image space
        vertices: Vec<(f32, f32)>,
        /// Whether the last vertex connects back to the first
        closed: bool,
    },
    /// A filled circular marker.
    Marker {
        /// Center X coordinate in image space
        x: f32,
        /// Center Y coordinate in image space
        y: f32,
        /// Radius in image pixels
        radius: f32,
    },
}

/// A shape with its paint.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayItem {
    pub shape: OverlayShape,
    pub fill: Color,
    /// Stroke color; markers are fill-only and ignore it
    pub stroke: Color,
    pub line_width: f32,
}

impl OverlayItem {
    pub fn new(shape: OverlayShape, fill: Color, stroke: Color) -> Self {
        Self {
            shape,
            fill,
            stroke,
            line_width: 1.0,
        }
    }

    pub fn line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }
}

/// An ordered collection of overlay items; later items paint over earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    /// Items to render
    pub items: Vec<OverlayItem>,
    /// Shapes for a drawing in progress, painted after `items`
    pub preview: Vec<OverlayItem>,
}

impl Overlay {
    /// Create a new empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item to the overlay.
    pub fn push(&mut self, item: OverlayItem) {
        self.items.push(item);
    }

    /// Add an item to the preview layer.
    pub fn push_preview(&mut self, item: OverlayItem) {
        self.preview.push(item);
    }

    /// Check if the overlay is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.preview.is_empty()
    }

    /// All items in paint order.
    pub fn iter(&self) -> impl Iterator<Item = &OverlayItem> {
        self.items.iter().chain(self.preview.iter())
    }
}
