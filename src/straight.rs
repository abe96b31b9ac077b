//! Straight edge path builder

use crate::center::simple_edge_center;
use crate::types::{PathResult, Point};

/// Build a single straight segment from `source` to `target`.
///
/// The label sits at the arithmetic midpoint. Anchor sides play no role
/// here, so none are taken.
pub fn straight_path(source: Point, target: Point) -> PathResult {
    let center = simple_edge_center(source, target);

    PathResult {
        path: format!("M {},{}L {},{}", source.x, source.y, target.x, target.y),
        label: center.center,
        offset: center.offset,
    }
}
