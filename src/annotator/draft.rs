//! The polygon currently being drawn.

use crate::annotator::region::MIN_REGION_POINTS;
use crate::geometry::Point;

/// Minimum draft length for a double-click finish, before trimming.
pub const MIN_DOUBLE_CLICK_POINTS: usize = 5;

/// Points appended by the two clicks that precede every double-click event.
pub const DOUBLE_CLICK_TRAILING_POINTS: usize = 2;

/// In-progress vertex list. At most one exists per annotator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    points: Vec<Point>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex, starting the draft if it was empty.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Discard all points.
    pub fn cancel(&mut self) {
        self.points.clear();
    }

    /// Take the points for a programmatic finish. Leaves the draft untouched
    /// and returns `None` if it has fewer than three points.
    pub fn finish(&mut self) -> Option<Vec<Point>> {
        if self.points.len() < MIN_REGION_POINTS {
            return None;
        }
        Some(std::mem::take(&mut self.points))
    }

    /// Take the points for a double-click finish.
    ///
    /// The two clicks that make up the double click have already been
    /// appended, so they are dropped; at least five points are required
    /// beforehand, leaving a polygon of three or more.
    pub fn finish_double_click(&mut self) -> Option<Vec<Point>> {
        if self.points.len() < MIN_DOUBLE_CLICK_POINTS {
            return None;
        }
        let mut points = std::mem::take(&mut self.points);
        points.truncate(points.len() - DOUBLE_CLICK_TRAILING_POINTS);
        Some(points)
    }

    pub(crate) fn vertices(&self) -> Vec<(f32, f32)> {
        self.points.iter().map(|p| (p.x, p.y)).collect()
    }
}
