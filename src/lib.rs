//! flow-edges - edge path geometry for node-link diagrams
//!
//! This library computes SVG path strings and label anchor points for the
//! edges of a flow chart. Four routing styles are provided: straight,
//! simple bezier, bezier with a curvature coefficient, and orthogonal
//! "smooth step" routing with rounded corners. Every builder is a pure
//! function over value types: it takes endpoint coordinates, anchor sides
//! and style parameters, and returns a [`PathResult`] with the path string,
//! the label center and the per-axis offset between label and source.
//!
//! Rendering, hit-testing and interaction are out of scope; a rendering
//! layer is expected to call a builder once per edge per re-render and
//! feed the path string straight into an SVG `d` attribute.
//!
//! # Example
//!
//! ```rust
//! use flow_edges::{bezier_path, BezierParams, Point};
//!
//! let edge = bezier_path(&BezierParams::new(
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 100.0),
//! ));
//! assert_eq!(edge.path, "M0,0 C0,50 0,50 0,100");
//! assert_eq!(edge.label, Point::new(0.0, 50.0));
//! ```

pub mod bezier;
pub mod center;
pub mod error;
pub mod simple_bezier;
pub mod smooth_step;
pub mod straight;
pub mod types;

pub use bezier::{bezier_path, BezierParams, DEFAULT_CURVATURE};
pub use center::{bezier_edge_center, simple_edge_center, EdgeCenter};
pub use error::PathError;
pub use simple_bezier::{simple_bezier_path, SimpleBezierParams};
pub use smooth_step::{
    smooth_step_path, step_path, SmoothStepParams, DEFAULT_CORNER_RADIUS, DEFAULT_GAP_OFFSET,
};
pub use straight::straight_path;
pub use types::{AnchorSide, PathResult, Point};

use serde::{Deserialize, Serialize};

/// Routing style of an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeKind {
    /// Single straight segment
    Straight,
    /// Curvature-free S-curve
    SimpleBezier,
    /// Cubic bezier with a curvature coefficient
    Bezier,
    /// Orthogonal route with rounded corners
    SmoothStep,
    /// Orthogonal route with sharp corners
    Step,
}

/// A complete, serializable description of one edge.
///
/// This is the record a rendering layer would persist per edge. Optional
/// style fields fall back to each builder's defaults when absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeSpec {
    pub kind: EdgeKind,
    pub source: Point,
    pub source_side: AnchorSide,
    pub target: Point,
    pub target_side: AnchorSide,
    /// Curvature coefficient for [`EdgeKind::Bezier`]
    pub curvature: Option<f64>,
    /// Corner radius for [`EdgeKind::SmoothStep`]
    pub corner_radius: Option<f64>,
    /// Split-line x override for the orthogonal kinds
    pub center_x: Option<f64>,
    /// Split-line y override for the orthogonal kinds
    pub center_y: Option<f64>,
    /// Gap offset for the orthogonal kinds
    pub gap_offset: Option<f64>,
}

impl Default for EdgeSpec {
    fn default() -> Self {
        Self {
            kind: EdgeKind::Bezier,
            source: Point::default(),
            source_side: AnchorSide::Bottom,
            target: Point::default(),
            target_side: AnchorSide::Top,
            curvature: None,
            corner_radius: None,
            center_x: None,
            center_y: None,
            gap_offset: None,
        }
    }
}

impl EdgeSpec {
    /// Create a spec of the given kind with default sides and style fields
    pub fn new(kind: EdgeKind, source: Point, target: Point) -> Self {
        Self {
            kind,
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

fn ensure_finite(name: &'static str, value: f64) -> Result<(), PathError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PathError::NonFinite { name, value })
    }
}

fn ensure_finite_point(x_name: &'static str, y_name: &'static str, p: Point) -> Result<(), PathError> {
    ensure_finite(x_name, p.x)?;
    ensure_finite(y_name, p.y)
}

/// Build the path for an [`EdgeSpec`], validating the input first.
///
/// This is the front door for callers that hold untrusted or deserialized
/// edge records: NaN and infinite coordinates are rejected with
/// [`PathError::NonFinite`] instead of poisoning the output path string.
pub fn edge_path(spec: &EdgeSpec) -> Result<PathResult, PathError> {
    ensure_finite_point("source.x", "source.y", spec.source)?;
    ensure_finite_point("target.x", "target.y", spec.target)?;
    if let Some(c) = spec.curvature {
        ensure_finite("curvature", c)?;
    }
    if let Some(r) = spec.corner_radius {
        ensure_finite("corner_radius", r)?;
    }
    if let Some(x) = spec.center_x {
        ensure_finite("center_x", x)?;
    }
    if let Some(y) = spec.center_y {
        ensure_finite("center_y", y)?;
    }
    if let Some(g) = spec.gap_offset {
        ensure_finite("gap_offset", g)?;
    }

    let result = match spec.kind {
        EdgeKind::Straight => straight_path(spec.source, spec.target),
        EdgeKind::SimpleBezier => simple_bezier_path(&SimpleBezierParams {
            source: spec.source,
            source_side: spec.source_side,
            target: spec.target,
            target_side: spec.target_side,
        }),
        EdgeKind::Bezier => bezier_path(&BezierParams {
            source: spec.source,
            source_side: spec.source_side,
            target: spec.target,
            target_side: spec.target_side,
            curvature: spec.curvature.unwrap_or(DEFAULT_CURVATURE),
        }),
        EdgeKind::SmoothStep | EdgeKind::Step => {
            let params = SmoothStepParams {
                source: spec.source,
                source_side: spec.source_side,
                target: spec.target,
                target_side: spec.target_side,
                corner_radius: spec.corner_radius.unwrap_or(DEFAULT_CORNER_RADIUS),
                center_x: spec.center_x,
                center_y: spec.center_y,
                gap_offset: spec.gap_offset.unwrap_or(DEFAULT_GAP_OFFSET),
            };
            match spec.kind {
                EdgeKind::Step => step_path(&params),
                _ => smooth_step_path(&params),
            }
        }
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dispatch_matches_direct_builders() {
        let source = Point::new(0.0, 0.0);
        let target = Point::new(100.0, 100.0);

        let spec = EdgeSpec::new(EdgeKind::Straight, source, target);
        assert_eq!(edge_path(&spec).unwrap(), straight_path(source, target));

        let spec = EdgeSpec::new(EdgeKind::Bezier, source, target);
        assert_eq!(
            edge_path(&spec).unwrap(),
            bezier_path(&BezierParams::new(source, target))
        );

        let spec = EdgeSpec::new(EdgeKind::SmoothStep, source, target);
        assert_eq!(
            edge_path(&spec).unwrap(),
            smooth_step_path(&SmoothStepParams::new(source, target))
        );
    }

    #[test]
    fn test_step_kind_forces_sharp_corners() {
        let spec = EdgeSpec {
            kind: EdgeKind::Step,
            source: Point::new(0.0, 0.0),
            target: Point::new(100.0, 100.0),
            source_side: AnchorSide::Right,
            target_side: AnchorSide::Left,
            // an explicit radius is ignored for step edges
            corner_radius: Some(12.0),
            ..EdgeSpec::default()
        };
        let result = edge_path(&spec).unwrap();
        assert!(result.path.contains("Q 50,0 50,0"));
    }

    #[test]
    fn test_non_finite_source_is_rejected() {
        let spec = EdgeSpec::new(
            EdgeKind::Straight,
            Point::new(f64::NAN, 0.0),
            Point::new(10.0, 0.0),
        );
        let err = edge_path(&spec).unwrap_err();
        assert!(matches!(err, PathError::NonFinite { name: "source.x", .. }));
    }

    #[test]
    fn test_non_finite_style_field_is_rejected() {
        let spec = EdgeSpec {
            curvature: Some(f64::INFINITY),
            ..EdgeSpec::default()
        };
        let err = edge_path(&spec).unwrap_err();
        assert!(matches!(err, PathError::NonFinite { name: "curvature", .. }));
    }

    #[test]
    fn test_spec_deserializes_with_defaults() {
        let spec: EdgeSpec = serde_json::from_str(
            r#"{
                "kind": "smooth-step",
                "source": { "x": 0.0, "y": 0.0 },
                "target": { "x": 100.0, "y": 0.0 },
                "source_side": "right",
                "target_side": "left"
            }"#,
        )
        .unwrap();
        assert_eq!(spec.kind, EdgeKind::SmoothStep);
        assert_eq!(spec.corner_radius, None);
        let result = edge_path(&spec).unwrap();
        assert_eq!(result.path, "M0 0L20 0L50 0L50 0L80 0L100 0");
    }
}
