//! Tests for the draft/region lifecycle and the id counter.

use super::{points, ready_annotator};
use crate::annotator::{AnnotatorState, RegionAnnotator, RegionEditor, RegionMap};
use crate::background::BackgroundImage;
use crate::geometry::Point;

#[test]
fn test_finish_with_fewer_than_three_points_is_noop() {
    for n in 0..3 {
        let mut annotator = ready_annotator();
        for p in points(n) {
            annotator.add_point(p);
        }
        assert_eq!(annotator.finish_region(), None);
        assert!(annotator.regions().is_empty());
        assert_eq!(annotator.latest_id(), 0);
        assert_eq!(annotator.draft().len(), n);
    }
}

#[test]
fn test_finish_stores_draft_under_next_id() {
    for n in 3..8 {
        let mut annotator = ready_annotator();
        let before = annotator.latest_id();
        let drawn = points(n);
        for p in &drawn {
            annotator.add_point(*p);
        }

        let id = annotator.finish_region().expect("draft should finish");
        assert_eq!(id, before + 1);
        assert_eq!(annotator.latest_id(), id);
        assert_eq!(annotator.regions().len(), 1);
        assert_eq!(annotator.regions().get(id).unwrap().points(), drawn.as_slice());
        assert!(annotator.draft().is_empty());
        assert_eq!(annotator.state(), AnnotatorState::Idle);
    }
}

#[test]
fn test_ids_are_sequential_and_never_reused() {
    let mut annotator = ready_annotator();
    for _ in 0..3 {
        for p in points(3) {
            annotator.add_point(p);
        }
        annotator.finish_region();
    }
    assert_eq!(annotator.regions().ids().collect::<Vec<_>>(), vec![1, 2, 3]);

    annotator.delete_region(3);
    for p in points(4) {
        annotator.add_point(p);
    }
    assert_eq!(annotator.finish_region(), Some(4));
    assert_eq!(annotator.regions().ids().collect::<Vec<_>>(), vec![1, 2, 4]);
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let mut annotator = ready_annotator();
    for p in points(3) {
        annotator.add_point(p);
    }
    annotator.finish_region();
    let before = annotator.regions().clone();

    annotator.delete_region(42);
    assert_eq!(annotator.regions(), &before);
    assert_eq!(annotator.latest_id(), 1);
}

#[test]
fn test_clear_resets_everything() {
    let mut annotator = ready_annotator();
    for _ in 0..2 {
        for p in points(5) {
            annotator.add_point(p);
        }
        annotator.finish_region();
    }
    annotator.add_point(Point::new(1.0, 1.0));
    annotator.select_region(2);

    annotator.clear();
    assert_eq!(annotator.latest_id(), 0);
    assert!(annotator.regions().is_empty());
    assert!(annotator.draft().is_empty());
    assert_eq!(annotator.selected(), None);

    // Counter restarts from 1
    for p in points(3) {
        annotator.add_point(p);
    }
    assert_eq!(annotator.finish_region(), Some(1));
}

#[test]
fn test_clear_on_empty_annotator() {
    let mut annotator = RegionAnnotator::headless();
    annotator.clear();
    assert_eq!(annotator.latest_id(), 0);
    assert!(annotator.regions().is_empty());
}

#[test]
fn test_select_does_not_validate_id() {
    let mut annotator = ready_annotator();
    annotator.select_region(99);
    assert_eq!(annotator.selected(), Some(99));
    assert!(annotator.regions().is_empty());
}

#[test]
fn test_deleting_selected_region_clears_selection() {
    let mut annotator = ready_annotator();
    for p in points(3) {
        annotator.add_point(p);
    }
    let id = annotator.finish_region().unwrap();
    annotator.select_region(id);
    annotator.delete_region(id);
    assert_eq!(annotator.selected(), None);
}

#[test]
fn test_loading_background_resets_state() {
    let mut annotator = ready_annotator();
    for p in points(3) {
        annotator.add_point(p);
    }
    annotator.finish_region();
    annotator.add_point(Point::new(5.0, 5.0));

    annotator.load_background(BackgroundImage::new(1024, 768).with_source("next.png"));
    assert_eq!(annotator.state(), AnnotatorState::Idle);
    assert!(annotator.regions().is_empty());
    assert_eq!(annotator.latest_id(), 0);
    assert_eq!(annotator.geometry().intrinsic.width, 1024);
    assert_eq!(annotator.geometry().intrinsic.height, 768);
}

#[test]
fn test_state_transitions() {
    let mut annotator = RegionAnnotator::headless();
    assert_eq!(annotator.state(), AnnotatorState::Empty);

    annotator.load_background(BackgroundImage::new(10, 10));
    assert_eq!(annotator.state(), AnnotatorState::Idle);

    annotator.add_point(Point::new(1.0, 1.0));
    assert_eq!(annotator.state(), AnnotatorState::Drawing);

    annotator.cancel_draft();
    assert_eq!(annotator.state(), AnnotatorState::Idle);

    annotator.unload_background();
    assert_eq!(annotator.state(), AnnotatorState::Empty);
}

#[test]
fn test_restore_regions_continues_counter() {
    let json = r#"{
        "2": [{"x":0.0,"y":0.0},{"x":10.0,"y":0.0},{"x":0.0,"y":10.0}],
        "7": [{"x":50.0,"y":50.0},{"x":60.0,"y":50.0},{"x":60.0,"y":60.0},{"x":50.0,"y":60.0}]
    }"#;
    let map = RegionMap::from_json(json).expect("Failed to import regions");

    let mut annotator = ready_annotator();
    annotator.restore_regions(map);
    assert_eq!(annotator.latest_id(), 7);

    for p in points(3) {
        annotator.add_point(p);
    }
    assert_eq!(annotator.finish_region(), Some(8));
}

#[test]
fn test_exhausted_counter_leaves_draft_in_place() {
    // Deserialized directly, so the max-id check in `from_json` is skipped
    let json = r#"{"4294967295": [{"x":0.0,"y":0.0},{"x":10.0,"y":0.0},{"x":0.0,"y":10.0}]}"#;
    let map: RegionMap = serde_json::from_str(json).expect("Failed to deserialize regions");

    let mut annotator = ready_annotator();
    annotator.restore_regions(map);
    assert_eq!(annotator.latest_id(), u32::MAX);

    for p in points(5) {
        annotator.add_point(p);
    }
    assert_eq!(annotator.finish_region(), None);
    assert_eq!(annotator.finish_region_from_double_click(), None);
    assert_eq!(annotator.latest_id(), u32::MAX);
    assert_eq!(annotator.regions().len(), 1);
    assert!(annotator.regions().get(0).is_none());
    assert_eq!(annotator.draft().len(), 5);
    assert_eq!(annotator.pending_notifications(), 0);
}

#[test]
fn test_region_at_prefers_topmost() {
    let mut annotator = ready_annotator();
    let big = [
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(100.0, 100.0),
        Point::new(0.0, 100.0),
    ];
    let small = [
        Point::new(40.0, 40.0),
        Point::new(60.0, 40.0),
        Point::new(60.0, 60.0),
        Point::new(40.0, 60.0),
    ];
    for p in big {
        annotator.add_point(p);
    }
    annotator.finish_region();
    for p in small {
        annotator.add_point(p);
    }
    annotator.finish_region();

    assert_eq!(annotator.region_at(Point::new(50.0, 50.0)), Some(2));
    assert_eq!(annotator.region_at(Point::new(10.0, 10.0)), Some(1));
    assert_eq!(annotator.region_at(Point::new(200.0, 200.0)), None);
}

#[test]
fn test_editor_trait_object() {
    let mut annotator = ready_annotator();
    let editor: &mut dyn RegionEditor = &mut annotator;

    for p in points(3) {
        editor.add_point(p);
    }
    assert_eq!(editor.finish_region(), Some(1));
    assert_eq!(editor.latest_id(), 1);

    let json = editor.regions_json().expect("Failed to export regions");
    let reloaded = RegionMap::from_json(&json).expect("Failed to import regions");
    assert_eq!(&reloaded, editor.regions());

    editor.delete_region(1);
    assert!(editor.regions().is_empty());
    editor.clear();
    assert_eq!(editor.latest_id(), 0);
}
