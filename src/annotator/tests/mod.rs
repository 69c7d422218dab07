//! Scenario tests for the region annotator.

mod event_tests;
mod state_tests;

use cms_ui::RecordingCanvas;

use crate::annotator::RegionAnnotator;
use crate::background::BackgroundImage;
use crate::geometry::Point;

const EPSILON: f32 = 0.0001;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Annotator with a recording canvas and a 400x300 background at 1:1 scale.
fn ready_annotator() -> RegionAnnotator<RecordingCanvas> {
    let mut annotator = RegionAnnotator::new(RecordingCanvas::new());
    annotator.load_background(BackgroundImage::new(400, 300));
    annotator
}

/// `n` distinct image-space points.
fn points(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| Point::new(10.0 + i as f32 * 7.0, 20.0 + (i % 2) as f32 * 13.0))
        .collect()
}
