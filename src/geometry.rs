//! Image-space geometry and the client-to-image coordinate transform.
//!
//! Regions are stored in the background image's intrinsic pixel grid. The
//! canvas showing the image may be scaled by CSS or a responsive layout, so
//! every pointer position has to be mapped through [`CanvasGeometry`] before
//! it is stored.

use serde::{Deserialize, Serialize};

/// A 2D point in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate distance to another point.
    pub fn distance_to(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f32, f32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// An axis-aligned rectangle in floating-point pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest rectangle enclosing all `points`, or `None` if there are none.
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }

    /// Check if a point is inside the rectangle (edges included).
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Where the canvas sits on screen and how big its backing store is.
///
/// `intrinsic` is the canvas's own pixel size (set to the background image's
/// natural size), `rendered` is the element's bounding box in client pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasGeometry {
    pub intrinsic: Size,
    pub rendered: Rect,
}

impl CanvasGeometry {
    /// A canvas displayed at 1:1 scale with its top-left corner at the client origin.
    pub fn unscaled(intrinsic: Size) -> Self {
        Self {
            intrinsic,
            rendered: Rect::new(0.0, 0.0, intrinsic.width as f32, intrinsic.height as f32),
        }
    }

    pub fn new(intrinsic: Size, rendered: Rect) -> Self {
        Self {
            intrinsic,
            rendered,
        }
    }

    /// Intrinsic pixels per rendered pixel on each axis.
    ///
    /// An axis with no rendered extent maps 1:1.
    pub fn scale(&self) -> (f32, f32) {
        let axis = |intrinsic: u32, rendered: f32| {
            if rendered > 0.0 && rendered.is_finite() {
                intrinsic as f32 / rendered
            } else {
                1.0
            }
        };
        (
            axis(self.intrinsic.width, self.rendered.width),
            axis(self.intrinsic.height, self.rendered.height),
        )
    }

    /// Convert a client-space pointer position to image space.
    pub fn client_to_image(&self, client_x: f32, client_y: f32) -> Point {
        let (sx, sy) = self.scale();
        Point::new(
            (client_x - self.rendered.x) * sx,
            (client_y - self.rendered.y) * sy,
        )
    }

    /// Convert an image-space point back to client space.
    ///
    /// An axis with a zero scale (empty intrinsic extent) maps 1:1.
    pub fn image_to_client(&self, point: Point) -> (f32, f32) {
        let inverse = |scale: f32| if scale > 0.0 { 1.0 / scale } else { 1.0 };
        let (sx, sy) = self.scale();
        (
            point.x * inverse(sx) + self.rendered.x,
            point.y * inverse(sy) + self.rendered.y,
        )
    }
}
