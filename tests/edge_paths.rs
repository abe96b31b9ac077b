//! End-to-end scenarios for the four routing styles.
//!
//! Each case pins the exact SVG path string, label point and offset for a
//! known input, so any change to the routing or formatting shows up as a
//! concrete diff.

use flow_edges::{
    bezier_path, edge_path, simple_bezier_path, smooth_step_path, straight_path, AnchorSide,
    BezierParams, EdgeKind, EdgeSpec, Point, SimpleBezierParams, SmoothStepParams,
};
use pretty_assertions::assert_eq;

#[test]
fn straight_horizontal_edge() {
    let result = straight_path(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    insta::assert_snapshot!(result.path, @"M 0,0L 10,0");
    assert_eq!(result.label, Point::new(5.0, 0.0));
    assert_eq!(result.offset, Point::new(5.0, 0.0));
}

#[test]
fn bezier_default_sides_vertical_edge() {
    let result = bezier_path(&BezierParams::new(
        Point::new(0.0, 0.0),
        Point::new(0.0, 100.0),
    ));
    insta::assert_snapshot!(result.path, @"M0,0 C0,50 0,50 0,100");
    assert_eq!(result.label, Point::new(0.0, 50.0));
}

#[test]
fn simple_bezier_horizontal_edge() {
    let result = simple_bezier_path(
        &SimpleBezierParams::new(Point::new(0.0, 0.0), Point::new(100.0, 60.0))
            .with_source_side(AnchorSide::Right)
            .with_target_side(AnchorSide::Left),
    );
    insta::assert_snapshot!(result.path, @"M0,0 C50,0 50,60 100,60");
    assert_eq!(result.label, Point::new(50.0, 30.0));
}

#[test]
fn smooth_step_opposite_anchors() {
    let result = smooth_step_path(
        &SmoothStepParams::new(Point::new(0.0, 0.0), Point::new(100.0, 100.0))
            .with_source_side(AnchorSide::Right)
            .with_target_side(AnchorSide::Left),
    );
    // One vertical jog between the gap stubs: two rounded corners
    insta::assert_snapshot!(result.path, @"M0 0L20 0L 45,0Q 50,0 50,5L 50,95Q 50,100 55,100L80 100L100 100");
    assert_eq!(result.path.matches('Q').count(), 2);
    assert_eq!(result.label, Point::new(50.0, 50.0));
    assert_eq!(result.offset, Point::new(50.0, 50.0));
}

#[test]
fn smooth_step_mixed_anchors_flip() {
    let result = smooth_step_path(
        &SmoothStepParams::new(Point::new(0.0, 0.0), Point::new(100.0, 100.0))
            .with_source_side(AnchorSide::Right)
            .with_target_side(AnchorSide::Bottom),
    );
    insta::assert_snapshot!(result.path, @"M0 0L 15,0Q 20,0 20,5L 20,115Q 20,120 25,120L 95,120Q 100,120 100,115L100 100");
    assert_eq!(result.label, Point::new(20.0, 60.0));
}

#[test]
fn every_builder_is_deterministic() {
    let source = Point::new(3.5, -7.25);
    let target = Point::new(-120.0, 48.0);

    let straight = (
        straight_path(source, target),
        straight_path(source, target),
    );
    assert_eq!(straight.0, straight.1);

    let params = BezierParams::new(source, target)
        .with_source_side(AnchorSide::Left)
        .with_target_side(AnchorSide::Right);
    assert_eq!(bezier_path(&params), bezier_path(&params));

    let params = SimpleBezierParams::new(source, target);
    assert_eq!(simple_bezier_path(&params), simple_bezier_path(&params));

    let params = SmoothStepParams::new(source, target)
        .with_source_side(AnchorSide::Top)
        .with_target_side(AnchorSide::Right);
    assert_eq!(smooth_step_path(&params), smooth_step_path(&params));
}

#[test]
fn bezier_label_is_symmetric_under_endpoint_reversal() {
    for curvature in [0.1, 0.25, 0.5, 1.0] {
        let forward = bezier_path(
            &BezierParams::new(Point::new(12.0, -4.0), Point::new(-30.0, 77.0))
                .with_source_side(AnchorSide::Right)
                .with_target_side(AnchorSide::Left)
                .with_curvature(curvature),
        );
        let backward = bezier_path(
            &BezierParams::new(Point::new(-30.0, 77.0), Point::new(12.0, -4.0))
                .with_source_side(AnchorSide::Left)
                .with_target_side(AnchorSide::Right)
                .with_curvature(curvature),
        );
        assert_eq!(forward.label, backward.label);
    }
}

#[test]
fn spec_round_trips_through_json() {
    let spec = EdgeSpec::new(
        EdgeKind::SmoothStep,
        Point::new(0.0, 0.0),
        Point::new(100.0, 100.0),
    )
    .with_source_side(AnchorSide::Right)
    .with_target_side(AnchorSide::Left);

    let json = serde_json::to_string(&spec).unwrap();
    let restored: EdgeSpec = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, spec);
    assert_eq!(edge_path(&restored).unwrap(), edge_path(&spec).unwrap());
}
