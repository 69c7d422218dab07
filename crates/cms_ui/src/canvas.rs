//! Drawing surface abstraction.

use crate::{Color, Overlay, OverlayShape};

/// A 2D drawing surface in image-space pixels.
///
/// Hosts implement the primitives (for example on top of an HTML canvas 2D
/// context); [`Canvas::draw_overlay`] paints a whole frame from them.
pub trait Canvas {
    /// Resize the surface to `width` x `height` pixels and erase it.
    fn clear(&mut self, width: u32, height: u32);

    /// Fill the area enclosed by `vertices`.
    fn fill_path(&mut self, vertices: &[(f32, f32)], color: Color);

    /// Stroke the path through `vertices`, closing it if `closed`.
    fn stroke_path(&mut self, vertices: &[(f32, f32)], closed: bool, color: Color, width: f32);

    /// Fill a circle.
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color);

    /// Clear the surface and paint every item of `overlay` in order.
    fn draw_overlay(&mut self, width: u32, height: u32, overlay: &Overlay) {
        self.clear(width, height);
        for item in overlay.iter() {
            match &item.shape {
                OverlayShape::Polygon { vertices, closed } => {
                    if vertices.is_empty() {
                        continue;
                    }
                    self.fill_path(vertices, item.fill);
                    self.stroke_path(vertices, *closed, item.stroke, item.line_width);
                }
                OverlayShape::Marker { x, y, radius } => {
                    self.fill_circle(*x, *y, *radius, item.fill);
                }
            }
        }
    }
}

/// A canvas that draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCanvas;

impl Canvas for NullCanvas {
    fn clear(&mut self, _width: u32, _height: u32) {}
    fn fill_path(&mut self, _vertices: &[(f32, f32)], _color: Color) {}
    fn stroke_path(&mut self, _vertices: &[(f32, f32)], _closed: bool, _color: Color, _width: f32) {}
    fn fill_circle(&mut self, _x: f32, _y: f32, _radius: f32, _color: Color) {}
}

/// A single recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: u32,
        height: u32,
    },
    FillPath {
        vertices: Vec<(f32, f32)>,
        color: Color,
    },
    StrokePath {
        vertices: Vec<(f32, f32)>,
        closed: bool,
        color: Color,
        width: f32,
    },
    FillCircle {
        x: f32,
        y: f32,
        radius: f32,
        color: Color,
    },
}

/// A canvas that records drawing calls, used for headless rendering checks.
///
/// Only the most recent frame is kept: `clear` discards earlier commands.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    frames: usize,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the current frame, starting with its `Clear`.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of frames drawn so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Size given to the last `clear`, if any.
    pub fn size(&self) -> Option<(u32, u32)> {
        match self.commands.first() {
            Some(DrawCommand::Clear { width, height }) => Some((*width, *height)),
            _ => None,
        }
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, width: u32, height: u32) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width, height });
        self.frames += 1;
    }

    fn fill_path(&mut self, vertices: &[(f32, f32)], color: Color) {
        self.commands.push(DrawCommand::FillPath {
            vertices: vertices.to_vec(),
            color,
        });
    }

    fn stroke_path(&mut self, vertices: &[(f32, f32)], closed: bool, color: Color, width: f32) {
        self.commands.push(DrawCommand::StrokePath {
            vertices: vertices.to_vec(),
            closed,
            color,
            width,
        });
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            x,
            y,
            radius,
            color,
        });
    }
}
