//! Command/query interface handed to the form field that hosts an annotator.
//!
//! The host does not own the annotator's lifecycle; it only drives it
//! through this trait and persists what [`RegionEditor::regions`] returns.

use cms_ui::{Canvas, Subscription};

use crate::annotator::editor::RegionAnnotator;
use crate::annotator::region::{RegionId, RegionMap};
use crate::geometry::Point;

pub trait RegionEditor {
    /// Current regions, keyed by id.
    fn regions(&self) -> &RegionMap;

    /// Current id counter value.
    fn latest_id(&self) -> RegionId;

    /// Reset the counter to 0 and drop all regions and the draft.
    fn clear(&mut self);

    /// Append an image-space point to the draft.
    fn add_point(&mut self, point: Point);

    /// Complete the draft (three-point minimum, no trimming).
    fn finish_region(&mut self) -> Option<RegionId>;

    /// Remove a region; unknown ids are ignored.
    fn delete_region(&mut self, id: RegionId);

    /// Highlight a region; the id is not validated.
    fn select_region(&mut self, id: RegionId);

    /// Register a deferred completion callback. See
    /// [`RegionAnnotator::subscribe_finish_region`] for the value passed.
    fn subscribe_finish_region(&self, callback: Box<dyn FnMut(RegionId)>) -> Subscription;

    /// Serialize the regions for the host's form value.
    fn regions_json(&self) -> Result<String, serde_json::Error> {
        self.regions().to_json()
    }
}

impl<C: Canvas> RegionEditor for RegionAnnotator<C> {
    fn regions(&self) -> &RegionMap {
        RegionAnnotator::regions(self)
    }

    fn latest_id(&self) -> RegionId {
        RegionAnnotator::latest_id(self)
    }

    fn clear(&mut self) {
        RegionAnnotator::clear(self)
    }

    fn add_point(&mut self, point: Point) {
        RegionAnnotator::add_point(self, point)
    }

    fn finish_region(&mut self) -> Option<RegionId> {
        RegionAnnotator::finish_region(self)
    }

    fn delete_region(&mut self, id: RegionId) {
        RegionAnnotator::delete_region(self, id)
    }

    fn select_region(&mut self, id: RegionId) {
        RegionAnnotator::select_region(self, id)
    }

    fn subscribe_finish_region(&self, callback: Box<dyn FnMut(RegionId)>) -> Subscription {
        RegionAnnotator::subscribe_finish_region(self, callback)
    }
}
