//! Simple bezier edge path builder (no curvature parameter)

use serde::{Deserialize, Serialize};

use crate::center::bezier_edge_center;
use crate::types::{AnchorSide, PathResult, Point};

/// Parameters for [`simple_bezier_path`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimpleBezierParams {
    pub source: Point,
    pub source_side: AnchorSide,
    pub target: Point,
    pub target_side: AnchorSide,
}

impl Default for SimpleBezierParams {
    fn default() -> Self {
        Self {
            source: Point::default(),
            source_side: AnchorSide::Bottom,
            target: Point::default(),
            target_side: AnchorSide::Top,
        }
    }
}

impl SimpleBezierParams {
    /// Create parameters for the given endpoints with default sides
    pub fn new(source: Point, target: Point) -> Self {
        Self {
            source,
            target,
            ..Self::default()
        }
    }

    /// Set the source anchor side
    pub fn with_source_side(mut self, side: AnchorSide) -> Self {
        self.source_side = side;
        self
    }

    /// Set the target anchor side
    pub fn with_target_side(mut self, side: AnchorSide) -> Self {
        self.target_side = side;
        self
    }
}

/// Control point at the fixed directional midpoint: on the anchor axis the
/// control sits halfway between the endpoints, on the cross axis it keeps
/// the endpoint's own coordinate.
fn control_point(side: AnchorSide, from: Point, to: Point) -> Point {
    if side.is_horizontal() {
        Point::new(0.5 * (from.x + to.x), from.y)
    } else {
        Point::new(from.x, 0.5 * (from.y + to.y))
    }
}

/// Build a cubic bezier path whose control points sit at fixed directional
/// midpoints, producing a curvature-free S-curve.
pub fn simple_bezier_path(params: &SimpleBezierParams) -> PathResult {
    let source_control = control_point(params.source_side, params.source, params.target);
    let target_control = control_point(params.target_side, params.target, params.source);

    let center = bezier_edge_center(params.source, params.target, source_control, target_control);

    PathResult {
        path: format!(
            "M{},{} C{},{} {},{} {},{}",
            params.source.x,
            params.source.y,
            source_control.x,
            source_control.y,
            target_control.x,
            target_control.y,
            params.target.x,
            params.target.y
        ),
        label: center.center,
        offset: center.offset,
    }
}
