use super::*;

fn rect() -> Rect {
    Rect::new(10.0, 20.0, 110.0, 70.0)
}

#[test]
fn rect_edges_follow_fixed_winding() {
    let top = Segment::from_rect_edge(rect(), Edge::Top);
    assert_eq!(top.a, Point::new(10.0, 20.0));
    assert_eq!(top.b, Point::new(110.0, 20.0));

    let bottom = Segment::from_rect_edge(rect(), Edge::Bottom);
    assert_eq!(bottom.a, Point::new(110.0, 70.0));
    assert_eq!(bottom.b, Point::new(10.0, 70.0));

    let left = Segment::from_rect_edge(rect(), Edge::Left);
    assert_eq!(left.a, Point::new(10.0, 70.0));
    assert_eq!(left.b, Point::new(10.0, 20.0));

    let right = Segment::from_rect_edge(rect(), Edge::Right);
    assert_eq!(right.a, Point::new(110.0, 20.0));
    assert_eq!(right.b, Point::new(110.0, 70.0));
}

#[test]
fn control_points_sit_on_primary_midpoint() {
    let curve = CubicCurve::new(Point::new(2.0, 0.0), Point::new(8.0, 40.0));
    let (c1, c2) = control_points(&curve, Axis::Vertical);
    assert_eq!(c1, Point::new(2.0, 20.0));
    assert_eq!(c2, Point::new(8.0, 20.0));

    let (c1, c2) = control_points(&curve, Axis::Horizontal);
    assert_eq!(c1, Point::new(5.0, 0.0));
    assert_eq!(c2, Point::new(5.0, 40.0));
}

#[test]
fn cubic_bez_keeps_true_endpoints() {
    let curve = CubicCurve::new(Point::new(0.0, 0.0), Point::new(10.0, 30.0));
    let bez = to_cubic_bez(&curve, Axis::Vertical);
    assert_eq!(bez.p0, curve.a);
    assert_eq!(bez.p3, curve.b);
}

#[test]
fn with_axis_coord_moves_only_that_axis() {
    let s = Segment::from_rect_edge(rect(), Edge::Top).with_axis_coord(Axis::Vertical, 90.0, 91.0);
    assert_eq!(s.a, Point::new(10.0, 90.0));
    assert_eq!(s.b, Point::new(110.0, 91.0));
}

#[test]
fn with_axis_coord_on_horizontal_travel() {
    let s = Segment::from_rect_edge(rect(), Edge::Right).with_axis_coord(
        Axis::Horizontal,
        400.0,
        401.0,
    );
    assert_eq!(s.a, Point::new(400.0, 20.0));
    assert_eq!(s.b, Point::new(401.0, 70.0));
}
