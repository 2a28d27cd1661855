use crate::{
    foundation::core::{Axis, CubicBez, Point, Rect},
    geometry::edge::Edge,
};

/// Ordered pair of endpoints.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// The endpoints of `rect`'s `edge`, in the edge's fixed winding.
    pub fn from_rect_edge(rect: Rect, edge: Edge) -> Self {
        let (a, b) = match edge {
            Edge::Top => ((rect.x0, rect.y0), (rect.x1, rect.y0)),
            Edge::Bottom => ((rect.x1, rect.y1), (rect.x0, rect.y1)),
            Edge::Left => ((rect.x0, rect.y1), (rect.x0, rect.y0)),
            Edge::Right => ((rect.x1, rect.y0), (rect.x1, rect.y1)),
        };
        Self::new(Point::new(a.0, a.1), Point::new(b.0, b.1))
    }

    /// Copy with `a` moved to `value_a` and `b` to `value_b` along `axis`.
    pub fn with_axis_coord(mut self, axis: Axis, value_a: f64, value_b: f64) -> Self {
        self.a.set_coord(axis, value_a);
        self.b.set_coord(axis, value_b);
        self
    }
}

/// A cubic curve described only by its true endpoints.
///
/// The two control points are never stored: [`control_points`] derives them so
/// the primary-axis coordinate stays monotone in the curve parameter.
pub type CubicCurve = Segment;

/// Control points of `curve` when `axis` is its primary axis.
///
/// Both sit at the primary-axis midpoint; the first keeps `a`'s perpendicular
/// coordinate and the second keeps `b`'s.
pub fn control_points(curve: &CubicCurve, axis: Axis) -> (Point, Point) {
    let perp = axis.cross();
    let mid = (curve.a.get_coord(axis) + curve.b.get_coord(axis)) / 2.0;
    let c1 = axis.pack_point(mid, curve.a.get_coord(perp));
    let c2 = axis.pack_point(mid, curve.b.get_coord(perp));
    (c1, c2)
}

/// The full Bézier form of `curve`, with derived control points.
pub fn to_cubic_bez(curve: &CubicCurve, axis: Axis) -> CubicBez {
    let (c1, c2) = control_points(curve, axis);
    CubicBez::new(curve.a, c1, c2, curve.b)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/segment.rs"]
mod tests;
