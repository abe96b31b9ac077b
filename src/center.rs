//! Center (label anchor) calculators shared by the path builders

use crate::types::Point;

/// A representative center of an edge, plus the per-axis offset between
/// that center and the source anchor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeCenter {
    pub center: Point,
    pub offset: Point,
}

/// Center of a straight segment between `source` and `target`.
///
/// Used for straight edges and for the orthogonal router's opposite-anchor
/// split line. The center is the arithmetic midpoint; the offset is the
/// half-distance per axis, applied from whichever endpoint is closer along
/// that axis.
pub fn simple_edge_center(source: Point, target: Point) -> EdgeCenter {
    let x_offset = (target.x - source.x).abs() / 2.0;
    let center_x = if target.x < source.x {
        target.x + x_offset
    } else {
        target.x - x_offset
    };

    let y_offset = (target.y - source.y).abs() / 2.0;
    let center_y = if target.y < source.y {
        target.y + y_offset
    } else {
        target.y - y_offset
    };

    EdgeCenter {
        center: Point::new(center_x, center_y),
        offset: Point::new(x_offset, y_offset),
    }
}

/// Center of a cubic bezier defined by two endpoints and two control points.
///
/// Evaluates the curve at parameter t = 0.5 with the blending weights
/// `[0.125, 0.375, 0.375, 0.125]`. This is the parametric midpoint, not the
/// arc-length midpoint; the approximation is deliberate, cheap and close
/// enough for label placement. The offset is `|center - source|` per axis.
pub fn bezier_edge_center(
    source: Point,
    target: Point,
    source_control: Point,
    target_control: Point,
) -> EdgeCenter {
    let center_x =
        source.x * 0.125 + source_control.x * 0.375 + target_control.x * 0.375 + target.x * 0.125;
    let center_y =
        source.y * 0.125 + source_control.y * 0.375 + target_control.y * 0.375 + target.y * 0.125;

    EdgeCenter {
        center: Point::new(center_x, center_y),
        offset: Point::new((center_x - source.x).abs(), (center_y - source.y).abs()),
    }
}
