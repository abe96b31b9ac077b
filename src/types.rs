//! Core value types shared by all path builders

use serde::{Deserialize, Serialize};

/// A 2D point in diagram space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub(crate) fn distance(self, other: Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }

    /// Coordinate along the given axis
    pub(crate) fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Overwrite the coordinate along the given axis
    pub(crate) fn set_along(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
        }
    }
}

/// Which side of a node's bounding box a connection anchor protrudes from.
///
/// The side determines the initial direction of an edge's path: an edge
/// leaving a `Right` anchor starts by travelling in +x, and so on.
/// Serialized as the lowercase wire names `"top"`, `"right"`, `"bottom"`,
/// `"left"` used in persisted edge records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl AnchorSide {
    /// Unit direction an edge initially travels when leaving this side
    pub(crate) fn direction(self) -> Direction {
        match self {
            AnchorSide::Left => Direction { x: -1.0, y: 0.0 },
            AnchorSide::Right => Direction { x: 1.0, y: 0.0 },
            AnchorSide::Top => Direction { x: 0.0, y: -1.0 },
            AnchorSide::Bottom => Direction { x: 0.0, y: 1.0 },
        }
    }

    /// True for `Left` and `Right` anchors
    pub fn is_horizontal(self) -> bool {
        matches!(self, AnchorSide::Left | AnchorSide::Right)
    }
}

/// Unit direction vector with components in {-1, 0, 1}
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Direction {
    pub x: f64,
    pub y: f64,
}

impl Direction {
    /// Component along the given axis
    pub(crate) fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

/// Coordinate axis, used by the orthogonal router to pick its routing axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    X,
    Y,
}

impl Axis {
    pub(crate) fn opposite(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// The result of building an edge path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    /// SVG path `d` attribute string, starting with an absolute moveto
    pub path: String,
    /// Point at which the edge's text label should be centered
    pub label: Point,
    /// Absolute per-axis delta between the label point and the source anchor
    pub offset: Point,
}
