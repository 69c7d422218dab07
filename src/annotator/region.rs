//! Completed regions and the id-keyed region map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{Point, Rect};

/// Identifier of a completed region. Ids start at 1 and are never reused.
pub type RegionId = u32;

/// Minimum number of vertices for a closed region.
pub const MIN_REGION_POINTS: usize = 3;

/// A closed polygon in image coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Region {
    points: Vec<Point>,
}

impl Region {
    /// Wrap a vertex list. Callers are responsible for the minimum count;
    /// the annotator only builds regions from drafts that passed it.
    pub(crate) fn new(points: Vec<Point>) -> Self {
        Self { points }
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

    pub fn bounding_box(&self) -> Option<Rect> {
        Rect::enclosing(&self.points)
    }

    /// Enclosed area (shoelace formula), in square image pixels.
    pub fn area(&self) -> f32 {
        let n = self.points.len();
        if n < MIN_REGION_POINTS {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            sum += a.x * b.y - b.x * a.y;
        }
        sum.abs() / 2.0
    }

    /// Check if a point is inside the polygon (ray casting algorithm).
    pub fn contains(&self, point: &Point) -> bool {
        let n = self.points.len();
        if n < MIN_REGION_POINTS {
            return false;
        }

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = &self.points[i];
            let vj = &self.points[j];

            if ((vi.y > point.y) != (vj.y > point.y))
                && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
            {
                inside = !inside;
            }
            j = i;
        }

        inside
    }

    pub(crate) fn vertices(&self) -> Vec<(f32, f32)> {
        self.points.iter().map(|p| (p.x, p.y)).collect()
    }
}

/// Errors that can occur when loading a persisted region map.
#[derive(Error, Debug)]
pub enum RegionsError {
    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Region ids start at 1 and must leave room for the next id
    #[error("Invalid region id: {id}")]
    InvalidId { id: RegionId },

    /// A stored region is not a closed polygon
    #[error("Region {id} has {count} points, at least {min} required", min = MIN_REGION_POINTS)]
    TooFewPoints { id: RegionId, count: usize },
}

/// Completed regions keyed by id, in ascending id order.
///
/// Serializes as a JSON object: `{"1": [{"x": 0.0, "y": 0.0}, ...], ...}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionMap {
    regions: BTreeMap<RegionId, Region>,
}

impl RegionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, id: RegionId, region: Region) {
        self.regions.insert(id, region);
    }

    pub(crate) fn remove(&mut self, id: RegionId) -> Option<Region> {
        self.regions.remove(&id)
    }

    pub(crate) fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(&id)
    }

    pub fn contains(&self, id: RegionId) -> bool {
        self.regions.contains_key(&id)
    }

    /// Regions in ascending id order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (RegionId, &Region)> {
        self.regions.iter().map(|(id, region)| (*id, region))
    }

    pub fn ids(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.regions.keys().copied()
    }

    /// Largest stored id, or 0 when empty.
    pub fn max_id(&self) -> RegionId {
        self.regions.keys().next_back().copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Export to a compact JSON string for the host form field.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Import from JSON, rejecting ids 0 and `RegionId::MAX` and regions
    /// with too few points.
    pub fn from_json(json: &str) -> Result<Self, RegionsError> {
        let map: Self = serde_json::from_str(json)?;
        for (id, region) in map.iter() {
            if id == 0 || id == RegionId::MAX {
                return Err(RegionsError::InvalidId { id });
            }
            if region.len() < MIN_REGION_POINTS {
                return Err(RegionsError::TooFewPoints {
                    id,
                    count: region.len(),
                });
            }
        }
        Ok(map)
    }
}
