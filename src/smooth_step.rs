//! Orthogonal (smooth step) edge router
//!
//! Routes an edge as a sequence of axis-aligned segments between two
//! directed anchors, with optional rounded corners. The router first pushes
//! each endpoint outward by a gap offset so the path leaves the node
//! boundary perpendicular before turning, then picks interior corner
//! points depending on whether the anchors face each other, face the same
//! way, or are mixed.

use serde::{Deserialize, Serialize};

use crate::center::simple_edge_center;
use crate::types::{AnchorSide, Axis, Direction, PathResult, Point};

/// Default corner radius for [`smooth_step_path`]
pub const DEFAULT_CORNER_RADIUS: f64 = 5.0;

/// Default stand-off distance between an anchor and the first turn
pub const DEFAULT_GAP_OFFSET: f64 = 20.0;

/// Parameters for [`smooth_step_path`] and [`step_path`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothStepParams {
    pub source: Point,
    pub source_side: AnchorSide,
    pub target: Point,
    pub target_side: AnchorSide,
    /// Radius used to round each direction change; clamped per corner to
    /// half the length of either adjoining segment
    pub corner_radius: f64,
    /// Explicit x coordinate for the split line between opposite-facing
    /// anchors; defaults to the straight-line midpoint
    pub center_x: Option<f64>,
    /// Explicit y coordinate for the split line between opposite-facing
    /// anchors; defaults to the straight-line midpoint
    pub center_y: Option<f64>,
    /// Distance the path travels perpendicular to the node boundary before
    /// its first turn
    pub gap_offset: f64,
}

impl Default for SmoothStepParams {
    fn default() -> Self {
        Self {
            source: Point::default(),
            source_side: AnchorSide::Bottom,
            target: Point::default(),
            target_side: AnchorSide::Top,
            corner_radius: DEFAULT_CORNER_RADIUS,
            center_x: None,
            center_y: None,
            gap_offset: DEFAULT_GAP_OFFSET,
        }
    }
}

impl SmoothStepParams {
    /// Create parameters for the given endpoints with default sides,
    /// corner radius and gap offset
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

    /// Set the corner radius
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Override the split-line x coordinate
    pub fn with_center_x(mut self, x: f64) -> Self {
        self.center_x = Some(x);
        self
    }

    /// Override the split-line y coordinate
    pub fn with_center_y(mut self, y: f64) -> Self {
        self.center_y = Some(y);
        self
    }

    /// Set the gap offset
    pub fn with_gap_offset(mut self, gap: f64) -> Self {
        self.gap_offset = gap;
        self
    }
}

/// Overall routing direction between two points, constrained to the
/// source anchor's axis: horizontal anchors route along x, vertical
/// anchors along y, with the sign chosen by the relative position.
fn routing_direction(source: Point, source_side: AnchorSide, target: Point) -> Direction {
    if source_side.is_horizontal() {
        if source.x < target.x {
            Direction { x: 1.0, y: 0.0 }
        } else {
            Direction { x: -1.0, y: 0.0 }
        }
    } else if source.y < target.y {
        Direction { x: 0.0, y: 1.0 }
    } else {
        Direction { x: 0.0, y: -1.0 }
    }
}

/// Compute the full routed point sequence, the label center and the raw
/// straight-line offset.
///
/// The returned offset deliberately describes the straight-line
/// relationship between the anchors rather than the routed geometry; the
/// label center describes the rendered position.
fn route_points(params: &SmoothStepParams) -> (Vec<Point>, Point, Point) {
    let source = params.source;
    let target = params.target;
    let gap = params.gap_offset;

    let source_dir = params.source_side.direction();
    let target_dir = params.target_side.direction();

    let source_gapped = Point::new(source.x + source_dir.x * gap, source.y + source_dir.y * gap);
    let target_gapped = Point::new(target.x + target_dir.x * gap, target.y + target_dir.y * gap);

    let dir = routing_direction(source_gapped, params.source_side, target_gapped);
    let axis = if dir.x != 0.0 { Axis::X } else { Axis::Y };
    let curr_dir = dir.along(axis);

    let default_center = simple_edge_center(source, target);

    let mut source_gap_shift = Point::new(0.0, 0.0);
    let mut target_gap_shift = Point::new(0.0, 0.0);

    let interior: Vec<Point>;
    let center: Point;

    if source_dir.along(axis) * target_dir.along(axis) == -1.0 {
        // Opposite-facing anchors: split at a center line, producing a
        // single S/Z-shaped bend
        let center_x = params.center_x.unwrap_or(default_center.center.x);
        let center_y = params.center_y.unwrap_or(default_center.center.y);
        //    --->
        //    |
        // >---
        let vertical_split = vec![
            Point::new(center_x, source_gapped.y),
            Point::new(center_x, target_gapped.y),
        ];
        //    |
        //  ---
        //  |
        let horizontal_split = vec![
            Point::new(source_gapped.x, center_y),
            Point::new(target_gapped.x, center_y),
        ];

        let split_on_routing_axis = source_dir.along(axis) == curr_dir;
        interior = match (axis, split_on_routing_axis) {
            (Axis::X, true) | (Axis::Y, false) => vertical_split,
            (Axis::X, false) | (Axis::Y, true) => horizontal_split,
        };
        center = Point::new(center_x, center_y);
    } else {
        // Same or mixed-facing anchors: a single interior corner, combining
        // one endpoint's x with the other's y
        let source_target = Point::new(source_gapped.x, target_gapped.y);
        let target_source = Point::new(target_gapped.x, source_gapped.y);

        let mut corner = match axis {
            Axis::X => {
                if source_dir.x == curr_dir {
                    target_source
                } else {
                    source_target
                }
            }
            Axis::Y => {
                if source_dir.y == curr_dir {
                    source_target
                } else {
                    target_source
                }
            }
        };

        if params.source_side == params.target_side {
            // When both anchors face the same way and the raw endpoints sit
            // closer than the gap along the routing axis, the gapped point
            // and the corner would overlap. Shift whichever gapped endpoint
            // shares the routing direction back toward its anchor.
            let diff = (source.along(axis) - target.along(axis)).abs();
            if diff <= gap {
                let shift = (gap - 1.0).min(gap - diff);
                if source_dir.along(axis) == curr_dir {
                    let sign = if source_gapped.along(axis) > source.along(axis) {
                        -1.0
                    } else {
                        1.0
                    };
                    source_gap_shift.set_along(axis, sign * shift);
                } else {
                    let sign = if target_gapped.along(axis) > target.along(axis) {
                        -1.0
                    } else {
                        1.0
                    };
                    target_gap_shift.set_along(axis, sign * shift);
                }
            }
        } else {
            // Mixed anchor sides (e.g. Right into Bottom): decide from the
            // cross-axis ordering whether the corner combination has to be
            // swapped so the path approaches the target from its anchor side
            let cross = axis.opposite();
            let same_dir = source_dir.along(axis) == target_dir.along(cross);
            let source_gt = source_gapped.along(cross) > target_gapped.along(cross);
            let source_lt = source_gapped.along(cross) < target_gapped.along(cross);

            let flip = if source_dir.along(axis) == 1.0 {
                (!same_dir && source_gt) || (same_dir && source_lt)
            } else {
                (!same_dir && source_lt) || (same_dir && source_gt)
            };
            if flip {
                corner = match axis {
                    Axis::X => source_target,
                    Axis::Y => target_source,
                };
            }
        }

        let source_gap_point = Point::new(
            source_gapped.x + source_gap_shift.x,
            source_gapped.y + source_gap_shift.y,
        );
        let target_gap_point = Point::new(
            target_gapped.x + target_gap_shift.x,
            target_gapped.y + target_gap_shift.y,
        );

        // Place the label on the longest axis-aligned extent of the route
        let max_x_distance = (source_gap_point.x - corner.x)
            .abs()
            .max((target_gap_point.x - corner.x).abs());
        let max_y_distance = (source_gap_point.y - corner.y)
            .abs()
            .max((target_gap_point.y - corner.y).abs());

        center = if max_x_distance >= max_y_distance {
            Point::new((source_gap_point.x + target_gap_point.x) / 2.0, corner.y)
        } else {
            Point::new(corner.x, (source_gap_point.y + target_gap_point.y) / 2.0)
        };

        interior = vec![corner];
    }

    let mut points = Vec::with_capacity(interior.len() + 4);
    points.push(source);
    points.push(Point::new(
        source_gapped.x + source_gap_shift.x,
        source_gapped.y + source_gap_shift.y,
    ));
    points.extend(interior);
    points.push(Point::new(
        target_gapped.x + target_gap_shift.x,
        target_gapped.y + target_gap_shift.y,
    ));
    points.push(target);

    (points, center, default_center.offset)
}

/// Path segment rounding the corner at `b` between segments `a -> b` and
/// `b -> c`.
///
/// The bend size is clamped to half the length of either adjoining
/// segment, so an oversized radius degrades gracefully instead of
/// overshooting. Colinear triples emit a plain line-to.
fn bend_segment(a: Point, b: Point, c: Point, size: f64) -> String {
    let bend = (a.distance(b) / 2.0).min(b.distance(c) / 2.0).min(size);
    let Point { x, y } = b;

    // no bend
    if (a.x == x && x == c.x) || (a.y == y && y == c.y) {
        return format!("L{} {}", x, y);
    }

    // first segment is horizontal
    if a.y == y {
        let x_dir = if a.x < c.x { -1.0 } else { 1.0 };
        let y_dir = if a.y < c.y { 1.0 } else { -1.0 };
        return format!(
            "L {},{}Q {},{} {},{}",
            x + bend * x_dir,
            y,
            x,
            y,
            x,
            y + bend * y_dir
        );
    }

    // first segment is vertical
    let x_dir = if a.x < c.x { 1.0 } else { -1.0 };
    let y_dir = if a.y < c.y { -1.0 } else { 1.0 };
    format!(
        "L {},{}Q {},{} {},{}",
        x,
        y + bend * y_dir,
        x,
        y,
        x + bend * x_dir,
        y
    )
}

/// Build a rectilinear multi-segment path between two directed anchors,
/// rounding each direction change with a quadratic curve.
pub fn smooth_step_path(params: &SmoothStepParams) -> PathResult {
    let (points, label, offset) = route_points(params);

    let mut path = String::new();
    for (i, point) in points.iter().enumerate() {
        if i > 0 && i < points.len() - 1 {
            path.push_str(&bend_segment(
                points[i - 1],
                *point,
                points[i + 1],
                params.corner_radius,
            ));
        } else {
            let command = if i == 0 { 'M' } else { 'L' };
            path.push_str(&format!("{}{} {}", command, point.x, point.y));
        }
    }

    PathResult {
        path,
        label,
        offset,
    }
}

/// [`smooth_step_path`] with sharp corners: the routing is identical, the
/// corner radius is forced to zero.
pub fn step_path(params: &SmoothStepParams) -> PathResult {
    smooth_step_path(&SmoothStepParams {
        corner_radius: 0.0,
        ..*params
    })
}
