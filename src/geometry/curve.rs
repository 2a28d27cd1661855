//! Axis intersection of the synthetic cubic boundary curves.

use crate::{
    foundation::core::{Axis, Point},
    geometry::segment::{CubicCurve, control_points},
};

/// Newton-Raphson refinement steps. The primary axis is monotone and close to
/// linear for these curves, so a linear seed converges in a few steps.
pub const NEWTON_ITERATIONS: usize = 3;

const PARAM_TOLERANCE: f64 = 1e-9;

#[inline]
fn bezier(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let nt = 1.0 - t;
    nt * nt * nt * p0 + 3.0 * nt * nt * t * p1 + 3.0 * nt * t * t * p2 + t * t * t * p3
}

#[inline]
fn bezier_derivative(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let nt = 1.0 - t;
    3.0 * (nt * nt * (p1 - p0) + 2.0 * nt * t * (p2 - p1) + t * t * (p3 - p2))
}

/// Curve parameter at which `curve` reaches `axis_pos` along `axis`.
///
/// Returns `1.0` when the curve has no extent along `axis`.
pub fn parameter_at_axis_position(curve: &CubicCurve, axis: Axis, axis_pos: f64) -> f64 {
    let a = curve.a.get_coord(axis);
    let b = curve.b.get_coord(axis);
    debug_assert!(
        (axis_pos >= a.min(b) - PARAM_TOLERANCE) && (axis_pos <= a.max(b) + PARAM_TOLERANCE),
        "axis position {axis_pos} outside curve span [{a}, {b}]"
    );

    let span = b - a;
    if span == 0.0 {
        return 1.0;
    }

    let (c1, c2) = control_points(curve, axis);
    let (p1, p2) = (c1.get_coord(axis), c2.get_coord(axis));

    let mut t = (axis_pos - a) / span;
    for _ in 0..NEWTON_ITERATIONS {
        let f = bezier(a, p1, p2, b, t) - axis_pos;
        let df = bezier_derivative(a, p1, p2, b, t);
        t -= f / df;
    }

    debug_assert!(
        (-PARAM_TOLERANCE..=1.0 + PARAM_TOLERANCE).contains(&t),
        "curve parameter {t} escaped [0, 1]"
    );
    t.clamp(0.0, 1.0)
}

/// Point on `curve` whose `axis` coordinate is `axis_pos`.
///
/// `axis_pos` must lie between the curve endpoints along `axis` (either order).
/// The perpendicular coordinate is the cubic evaluated at the solved parameter.
pub fn intersect_at_axis_position(curve: &CubicCurve, axis: Axis, axis_pos: f64) -> Point {
    let perp = axis.cross();
    let t = parameter_at_axis_position(curve, axis, axis_pos);
    let (c1, c2) = control_points(curve, axis);

    let across = bezier(
        curve.a.get_coord(perp),
        c1.get_coord(perp),
        c2.get_coord(perp),
        curve.b.get_coord(perp),
        t,
    );

    axis.pack_point(axis_pos, across)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/curve.rs"]
mod tests;
