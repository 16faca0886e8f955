//! Editor-space to page-space conversion.
//!
//! Editor space has its origin at the top-left with y growing downward; page
//! space puts the origin at the bottom-left with y growing upward.

use serde::{Deserialize, Serialize};

use crate::geometry::{rotate_point, BBox, Point};
use crate::schema::{EndPosition, ShapeSchema, StartPosition};

/// Page-space geometry for one shape, produced per render call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderGeometry {
    /// Bottom-left anchor of the box in page space.
    pub position: Point,
    pub width: f64,
    pub height: f64,
    pub rotate: f64,
    pub start_position: StartPosition,
    pub end_position: EndPosition,
    pub opacity: f64,
}

impl RenderGeometry {
    pub fn start(&self) -> Point {
        self.start_position.to_point()
    }

    pub fn end(&self) -> Point {
        self.end_position.to_point()
    }
}

/// Convert `schema` into the page space of a page `page_height` tall.
///
/// With `apply_rotate_translate` set, the box anchor is rotated by
/// `schema.rotate` around the box center, for primitives that cannot rotate
/// themselves. Lines pass `false`: they draw from explicit endpoints.
///
/// Never fails. Sizes and opacity pass through as given.
pub fn convert(
    schema: &ShapeSchema,
    page_height: f64,
    apply_rotate_translate: bool,
) -> RenderGeometry {
    let x = schema.position.x;
    let y = page_height - schema.position.y - schema.height;

    let start = schema.start_position;
    let end = schema.end_position;
    let start_position = StartPosition::new(start.x1, page_height - start.y1);
    let end_position = EndPosition::new(end.x2, page_height - end.y2);

    let mut position = Point::new(x, y);
    if apply_rotate_translate {
        let pivot = BBox::from_origin(position, schema.width, schema.height).center();
        position = rotate_point(position, pivot, schema.rotate);
    }

    log::trace!(
        "convert {}: anchor ({}, {}) -> ({}, {}) on page height {}",
        schema.label(),
        schema.position.x,
        schema.position.y,
        position.x,
        position.y,
        page_height
    );

    RenderGeometry {
        position,
        width: schema.width,
        height: schema.height,
        rotate: schema.rotate,
        start_position,
        end_position,
        opacity: schema.opacity,
    }
}
