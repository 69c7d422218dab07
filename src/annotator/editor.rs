//! The region annotator state machine.

use cms_ui::{Canvas, Event, Key, NullCanvas, Overlay, Subscribers, Subscription};

use crate::annotator::draft::Draft;
use crate::annotator::region::{Region, RegionId, RegionMap};
use crate::annotator::render::{AnnotatorStyle, build_overlay};
use crate::background::BackgroundImage;
use crate::geometry::{CanvasGeometry, Point, Rect, Size};

/// Coarse drawing state, derived from the annotator's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotatorState {
    /// No background image loaded; pointer input is ignored.
    Empty,
    /// Background loaded, no draft.
    Idle,
    /// Background loaded, draft has at least one point.
    Drawing,
}

/// Draws closed polygon regions over a background image.
///
/// Every state change that affects what is visible redraws the whole
/// `canvas`. Invalid operations (finishing a short draft, deleting an
/// unknown id) are silent no-ops.
pub struct RegionAnnotator<C: Canvas = NullCanvas> {
    canvas: C,
    style: AnnotatorStyle,
    background: Option<BackgroundImage>,
    geometry: CanvasGeometry,
    regions: RegionMap,
    draft: Draft,
    selected: Option<RegionId>,
    /// Id of the most recently completed region, 0 if none since the last reset
    latest_id: RegionId,
    finished: Subscribers<RegionId>,
}

impl RegionAnnotator<NullCanvas> {
    /// An annotator that keeps state but draws nowhere.
    pub fn headless() -> Self {
        Self::new(NullCanvas)
    }
}

impl<C: Canvas> RegionAnnotator<C> {
    pub fn new(canvas: C) -> Self {
        Self::with_style(canvas, AnnotatorStyle::default())
    }

    pub fn with_style(canvas: C, style: AnnotatorStyle) -> Self {
        Self {
            canvas,
            style,
            background: None,
            geometry: CanvasGeometry::default(),
            regions: RegionMap::new(),
            draft: Draft::new(),
            selected: None,
            latest_id: 0,
            finished: Subscribers::new(),
        }
    }

    // ========================================================================
    // Background
    // ========================================================================

    /// Show a new background image.
    ///
    /// Sizes the canvas to the image's natural dimensions and drops all
    /// regions, the draft, the selection and the id counter.
    pub fn load_background(&mut self, background: BackgroundImage) {
        let size = background.size();
        log::info!(
            "Loading background {}x{} ({})",
            size.width,
            size.height,
            background.source().unwrap_or("<unnamed>")
        );
        self.geometry = CanvasGeometry::unscaled(size);
        self.background = Some(background);
        self.reset();
    }

    /// Remove the background and return to the empty state.
    pub fn unload_background(&mut self) {
        self.background = None;
        self.geometry = CanvasGeometry::default();
        self.reset();
    }

    pub fn background(&self) -> Option<&BackgroundImage> {
        self.background.as_ref()
    }

    /// Tell the annotator where the canvas element is rendered, in client
    /// pixels. Call after every layout change.
    pub fn set_rendered_rect(&mut self, rect: Rect) {
        self.geometry.rendered = rect;
    }

    pub fn geometry(&self) -> &CanvasGeometry {
        &self.geometry
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn state(&self) -> AnnotatorState {
        if self.background.is_none() {
            AnnotatorState::Empty
        } else if self.draft.is_empty() {
            AnnotatorState::Idle
        } else {
            AnnotatorState::Drawing
        }
    }

    pub fn regions(&self) -> &RegionMap {
        &self.regions
    }

    /// Current value of the id counter.
    pub fn latest_id(&self) -> RegionId {
        self.latest_id
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn selected(&self) -> Option<RegionId> {
        self.selected
    }

    /// Topmost region containing `point` (image space).
    pub fn region_at(&self, point: Point) -> Option<RegionId> {
        self.regions
            .iter()
            .rev()
            .find(|(_, region)| region.contains(&point))
            .map(|(id, _)| id)
    }

    pub fn style(&self) -> &AnnotatorStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: AnnotatorStyle) {
        self.style = style;
        self.redraw();
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// The frame as it is currently drawn.
    pub fn overlay(&self) -> Overlay {
        build_overlay(&self.regions, self.selected, &self.draft, &self.style)
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Drop all regions and the draft and reset the id counter to 0.
    pub fn clear(&mut self) {
        self.reset();
    }

    /// Append an image-space point to the draft, starting one if needed.
    pub fn add_point(&mut self, point: Point) {
        self.draft.push(point);
        log::trace!("Draft point {} at ({}, {})", self.draft.len(), point.x, point.y);
        self.redraw();
    }

    /// Complete the draft if it has at least three points.
    pub fn finish_region(&mut self) -> Option<RegionId> {
        let id = self.next_id()?;
        let points = self.draft.finish()?;
        Some(self.complete(id, points))
    }

    /// Complete the draft from a double click: needs five points, of which
    /// the last two (the clicks forming the double click) are discarded.
    pub fn finish_region_from_double_click(&mut self) -> Option<RegionId> {
        let id = self.next_id()?;
        let points = self.draft.finish_double_click()?;
        Some(self.complete(id, points))
    }

    /// Discard the draft without creating a region.
    pub fn cancel_draft(&mut self) {
        if self.draft.is_empty() {
            return;
        }
        log::debug!("Cancelled draft with {} points", self.draft.len());
        self.draft.cancel();
        self.redraw();
    }

    /// Remove a region if present.
    pub fn delete_region(&mut self, id: RegionId) {
        if self.regions.remove(id).is_none() {
            return;
        }
        log::debug!("Deleted region {}", id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.redraw();
    }

    /// Highlight a region. The id is not checked against the map.
    pub fn select_region(&mut self, id: RegionId) {
        if self.selected != Some(id) {
            self.selected = Some(id);
            self.redraw();
        }
    }

    pub fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            self.redraw();
        }
    }

    /// Replace all regions with a persisted map. The id counter continues
    /// from the largest stored id.
    pub fn restore_regions(&mut self, regions: RegionMap) {
        self.latest_id = regions.max_id();
        self.regions = regions;
        self.draft.cancel();
        self.selected = None;
        log::debug!(
            "Restored {} regions, latest id {}",
            self.regions.len(),
            self.latest_id
        );
        self.redraw();
    }

    // ========================================================================
    // Notifications
    // ========================================================================

    /// Register a callback run once per completed region, on the flush after
    /// completion.
    ///
    /// The callback receives the id counter as it was *before* the region
    /// was stored, i.e. one less than the new region's id.
    pub fn subscribe_finish_region<F>(&self, callback: F) -> Subscription
    where
        F: FnMut(RegionId) + 'static,
    {
        self.finished.subscribe(callback)
    }

    /// Deliver queued finish notifications. Hosts call this once per
    /// event-loop turn, after handling input.
    pub fn flush_notifications(&self) -> usize {
        self.finished.flush()
    }

    /// Number of finish notifications waiting for delivery.
    pub fn pending_notifications(&self) -> usize {
        self.finished.pending()
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Feed a pointer or keyboard event. Returns true if it was consumed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        if let Event::KeyPressed { key: Key::Escape, .. } = event {
            let had_draft = !self.draft.is_empty();
            self.cancel_draft();
            return had_draft;
        }

        if self.background.is_none() {
            return false;
        }

        match event {
            Event::Click { position } => {
                let point = self.geometry.client_to_image(position.x, position.y);
                self.add_point(point);
                true
            }
            Event::DoubleClick { .. } => {
                self.finish_region_from_double_click();
                true
            }
            Event::ContextMenu { .. } => {
                self.cancel_draft();
                true
            }
            Event::MouseMoved { .. } | Event::KeyPressed { .. } => false,
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Id for the next completed region, `None` once the counter is exhausted.
    fn next_id(&self) -> Option<RegionId> {
        let id = self.latest_id.checked_add(1);
        if id.is_none() {
            log::warn!("Region id counter exhausted at {}", self.latest_id);
        }
        id
    }

    fn complete(&mut self, id: RegionId, points: Vec<Point>) -> RegionId {
        let previous = self.latest_id;
        self.latest_id = id;
        log::debug!("Completed region {} with {} points", id, points.len());
        self.regions.insert(id, Region::new(points));
        self.finished.schedule(previous);
        self.redraw();
        id
    }

    fn reset(&mut self) {
        self.regions.clear();
        self.draft.cancel();
        self.selected = None;
        self.latest_id = 0;
        self.redraw();
    }

    fn redraw(&mut self) {
        let size = self
            .background
            .as_ref()
            .map(BackgroundImage::size)
            .unwrap_or(Size::new(0, 0));
        let overlay = build_overlay(&self.regions, self.selected, &self.draft, &self.style);
        self.canvas.draw_overlay(size.width, size.height, &overlay);
    }
}

impl<C: Canvas + Default> Default for RegionAnnotator<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: Canvas> std::fmt::Debug for RegionAnnotator<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegionAnnotator")
            .field("state", &self.state())
            .field("regions", &self.regions.len())
            .field("draft", &self.draft.len())
            .field("selected", &self.selected)
            .field("latest_id", &self.latest_id)
            .finish()
    }
}
