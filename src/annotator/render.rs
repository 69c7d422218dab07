//! Overlay construction for the region annotator.

use cms_ui::{Color, Overlay, OverlayItem, OverlayShape};
use serde::{Deserialize, Serialize};

use crate::annotator::draft::Draft;
use crate::annotator::region::{RegionId, RegionMap};

/// Paint used for regions and the draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotatorStyle {
    pub selected_fill: Color,
    pub selected_stroke: Color,
    pub region_fill: Color,
    pub region_stroke: Color,
    pub draft_fill: Color,
    pub draft_stroke: Color,
    pub line_width: f32,
    /// Radius of the marker on the draft's first point, in image pixels
    pub first_point_radius: f32,
}

impl Default for AnnotatorStyle {
    fn default() -> Self {
        Self {
            selected_fill: Color::RED.with_alpha(0.3),
            selected_stroke: Color::RED,
            region_fill: Color::BLUE.with_alpha(0.3),
            region_stroke: Color::BLUE,
            draft_fill: Color::rgba8(0, 160, 0, 0.2),
            draft_stroke: Color::rgba8(0, 160, 0, 1.0),
            line_width: 2.0,
            first_point_radius: 5.0,
        }
    }
}

/// Build the full frame: regions in id order, then the draft on top.
pub fn build_overlay(
    regions: &RegionMap,
    selected: Option<RegionId>,
    draft: &Draft,
    style: &AnnotatorStyle,
) -> Overlay {
    let mut overlay = Overlay::new();

    for (id, region) in regions.iter() {
        let (fill, stroke) = if selected == Some(id) {
            (style.selected_fill, style.selected_stroke)
        } else {
            (style.region_fill, style.region_stroke)
        };
        overlay.push(
            OverlayItem::new(
                OverlayShape::Polygon {
                    vertices: region.vertices(),
                    closed: true,
                },
                fill,
                stroke,
            )
            .line_width(style.line_width),
        );
    }

    if let Some(first) = draft.points().first() {
        overlay.push_preview(
            OverlayItem::new(
                OverlayShape::Polygon {
                    vertices: draft.vertices(),
                    closed: false,
                },
                style.draft_fill,
                style.draft_stroke,
            )
            .line_width(style.line_width),
        );
        // Marks the start so the user can see the shape is still open
        overlay.push_preview(OverlayItem::new(
            OverlayShape::Marker {
                x: first.x,
                y: first.y,
                radius: style.first_point_radius,
            },
            style.draft_stroke,
            style.draft_stroke,
        ));
    }

    overlay
}
