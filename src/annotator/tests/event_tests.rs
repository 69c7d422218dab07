//! Tests for pointer and keyboard input handling.

use cms_ui::{Event, Key, Modifiers, Point as ClientPoint};

use super::{approx_eq, ready_annotator};
use crate::annotator::{AnnotatorState, RegionAnnotator};
use crate::background::BackgroundImage;
use crate::geometry::{Point, Rect};

fn click(x: f32, y: f32) -> Event {
    Event::Click {
        position: ClientPoint::new(x, y),
    }
}

fn double_click(x: f32, y: f32) -> Event {
    Event::DoubleClick {
        position: ClientPoint::new(x, y),
    }
}

fn escape() -> Event {
    Event::KeyPressed {
        key: Key::Escape,
        modifiers: Modifiers::default(),
    }
}

#[test]
fn test_click_maps_client_to_image_space() {
    // 1200x900 image rendered at 300x225 starting at (20, 40) -> k = 4
    let mut annotator = RegionAnnotator::headless();
    annotator.load_background(BackgroundImage::new(1200, 900));
    annotator.set_rendered_rect(Rect::new(20.0, 40.0, 300.0, 225.0));

    assert!(annotator.handle_event(&click(30.0, 45.5)));
    let p = annotator.draft().points()[0];
    assert!(approx_eq(p.x, 40.0));
    assert!(approx_eq(p.y, 22.0));
}

#[test]
fn test_transform_applies_to_every_click() {
    let mut annotator = RegionAnnotator::headless();
    annotator.load_background(BackgroundImage::new(800, 800));
    annotator.set_rendered_rect(Rect::new(0.0, 0.0, 400.0, 400.0));
    annotator.handle_event(&click(10.0, 10.0));

    // Responsive resize between clicks
    annotator.set_rendered_rect(Rect::new(0.0, 0.0, 200.0, 200.0));
    annotator.handle_event(&click(10.0, 10.0));

    let draft = annotator.draft().points();
    assert_eq!(draft[0], Point::new(20.0, 20.0));
    assert_eq!(draft[1], Point::new(40.0, 40.0));
}

#[test]
fn test_double_click_with_five_points_stores_three() {
    let mut annotator = ready_annotator();
    annotator.handle_event(&click(10.0, 10.0));
    annotator.handle_event(&click(100.0, 10.0));
    annotator.handle_event(&click(100.0, 100.0));
    // The two clicks a browser sends before the dblclick event
    annotator.handle_event(&click(100.0, 100.0));
    annotator.handle_event(&click(100.0, 100.0));
    annotator.handle_event(&double_click(100.0, 100.0));

    assert_eq!(annotator.latest_id(), 1);
    let region = annotator.regions().get(1).expect("region should exist");
    assert_eq!(
        region.points(),
        &[
            Point::new(10.0, 10.0),
            Point::new(100.0, 10.0),
            Point::new(100.0, 100.0)
        ]
    );
    assert!(annotator.draft().is_empty());
}

#[test]
fn test_double_click_with_four_points_keeps_draft() {
    for n in 1..=4 {
        let mut annotator = ready_annotator();
        for i in 0..n {
            annotator.handle_event(&click(i as f32 * 10.0, 5.0));
        }
        annotator.handle_event(&double_click(0.0, 0.0));
        assert!(annotator.regions().is_empty());
        assert_eq!(annotator.draft().len(), n);
        assert_eq!(annotator.state(), AnnotatorState::Drawing);
    }
}

#[test]
fn test_context_menu_discards_draft() {
    let mut annotator = ready_annotator();
    for i in 0..4 {
        annotator.handle_event(&click(i as f32, 1.0));
    }
    let consumed = annotator.handle_event(&Event::ContextMenu {
        position: ClientPoint::new(0.0, 0.0),
    });
    assert!(consumed);
    assert!(annotator.draft().is_empty());
    assert!(annotator.regions().is_empty());
    assert_eq!(annotator.latest_id(), 0);
}

#[test]
fn test_escape_discards_draft() {
    let mut annotator = ready_annotator();
    annotator.handle_event(&click(1.0, 1.0));
    assert!(annotator.handle_event(&escape()));
    assert_eq!(annotator.state(), AnnotatorState::Idle);
    // Nothing left to cancel
    assert!(!annotator.handle_event(&escape()));
}

#[test]
fn test_pointer_input_ignored_without_background() {
    let mut annotator = RegionAnnotator::headless();
    assert!(!annotator.handle_event(&click(5.0, 5.0)));
    assert!(!annotator.handle_event(&double_click(5.0, 5.0)));
    assert!(annotator.draft().is_empty());
    assert_eq!(annotator.state(), AnnotatorState::Empty);
}

#[test]
fn test_mouse_move_not_consumed() {
    let mut annotator = ready_annotator();
    let consumed = annotator.handle_event(&Event::MouseMoved {
        position: ClientPoint::new(3.0, 3.0),
    });
    assert!(!consumed);
    assert!(annotator.draft().is_empty());
}
