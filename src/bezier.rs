//! Bezier edge path builder with a tunable curvature

use serde::{Deserialize, Serialize};

use crate::center::bezier_edge_center;
use crate::types::{AnchorSide, PathResult, Point};

/// Default curvature coefficient for [`bezier_path`]
pub const DEFAULT_CURVATURE: f64 = 0.25;

/// Parameters for [`bezier_path`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierParams {
    pub source: Point,
    pub source_side: AnchorSide,
    pub target: Point,
    pub target_side: AnchorSide,
    /// Curvature coefficient, only felt when the target lies behind the
    /// source relative to its anchor direction
    pub curvature: f64,
}

impl Default for BezierParams {
    fn default() -> Self {
        Self {
            source: Point::default(),
            source_side: AnchorSide::Bottom,
            target: Point::default(),
            target_side: AnchorSide::Top,
            curvature: DEFAULT_CURVATURE,
        }
    }
}

impl BezierParams {
    /// Create parameters for the given endpoints with default sides and curvature
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

    /// Set the curvature coefficient
    pub fn with_curvature(mut self, curvature: f64) -> Self {
        self.curvature = curvature;
        self
    }
}

/// Offset of a control point from its endpoint, along the anchor axis.
///
/// `distance` is the endpoint separation measured outward along the anchor
/// direction. When it is non-negative the target lies ahead of the anchor
/// and half the distance gives a gentle curve; when negative the edge has
/// to loop back, and the square-root term keeps the loop visible without
/// growing linearly with distance.
fn control_offset(distance: f64, curvature: f64) -> f64 {
    if distance >= 0.0 {
        0.5 * distance
    } else {
        curvature * 25.0 * (-distance).sqrt()
    }
}

/// Control point for one endpoint, pushed out along its anchor axis
fn control_point(side: AnchorSide, from: Point, to: Point, curvature: f64) -> Point {
    match side {
        AnchorSide::Left => Point::new(from.x - control_offset(from.x - to.x, curvature), from.y),
        AnchorSide::Right => Point::new(from.x + control_offset(to.x - from.x, curvature), from.y),
        AnchorSide::Top => Point::new(from.x, from.y - control_offset(from.y - to.y, curvature)),
        AnchorSide::Bottom => Point::new(from.x, from.y + control_offset(to.y - from.y, curvature)),
    }
}

/// Build a cubic bezier path between two directed anchors.
///
/// Each control point is placed along its endpoint's anchor axis; see
/// [`control_offset`] for the asymmetric placement rule. The label sits at
/// the curve's parametric midpoint.
pub fn bezier_path(params: &BezierParams) -> PathResult {
    let source_control = control_point(
        params.source_side,
        params.source,
        params.target,
        params.curvature,
    );
    let target_control = control_point(
        params.target_side,
        params.target,
        params.source,
        params.curvature,
    );

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
