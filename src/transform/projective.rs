//! Rectangle-to-quadrilateral homographies.

use crate::{
    foundation::core::{Affine, Point},
    geometry::trapezoid::Trapezoid,
    transform::matrix::Transform3d,
};

/// Floor for the homography denominator. Nearly collinear quads clamp to this
/// instead of dividing by ~0, which yields a large but finite transform.
pub const DENOMINATOR_EPSILON: f64 = 1e-4;

/// 2D projective transform `[[a, b, c], [d, e, f], [g, h, i]]`, stored row-major.
///
/// Maps `(x, y)` to `((a·x + b·y + c) / w, (d·x + e·y + f) / w)` with
/// `w = g·x + h·y + i`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Homography {
    pub m: [f64; 9],
}

impl Homography {
    pub const IDENTITY: Self = Self {
        m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
    };

    /// The projective transform taking the `width × height` rectangle anchored at
    /// the origin onto `quad`.
    ///
    /// Rectangle corners `(0,0)`, `(w,0)`, `(0,h)`, `(w,h)` land on `quad.a`,
    /// `quad.b`, `quad.c`, `quad.d`. Coefficients are normalized by `i`, which is
    /// clamped to `±DENOMINATOR_EPSILON` when smaller in magnitude.
    pub fn rect_to_quad(width: f64, height: f64, quad: &Trapezoid) -> Self {
        let (x0, y0) = (quad.a.x, quad.a.y);
        let (x1, y1) = (quad.b.x, quad.b.y);
        let (x2, y2) = (quad.d.x, quad.d.y);
        let (x3, y3) = (quad.c.x, quad.c.y);

        // Unit square to quad, kept un-normalized (scaled by `den`).
        let sx = x0 - x1 + x2 - x3;
        let sy = y0 - y1 + y2 - y3;
        let dx1 = x1 - x2;
        let dx2 = x3 - x2;
        let dy1 = y1 - y2;
        let dy2 = y3 - y2;
        let den = dx1 * dy2 - dx2 * dy1;

        let g = sx * dy2 - dx2 * sy;
        let h = dx1 * sy - sx * dy1;

        let ua = (x1 - x0) * den + g * x1;
        let ub = (x3 - x0) * den + h * x3;
        let uc = x0 * den;
        let ud = (y1 - y0) * den + g * y1;
        let ue = (y3 - y0) * den + h * y3;
        let uf = y0 * den;

        // Compose with the rectangle scale `diag(1/w, 1/h)`, cleared by `w·h`.
        let wh = width * height;
        let a = ua * height;
        let b = ub * width;
        let c = uc * wh;
        let d = ud * height;
        let e = ue * width;
        let f = uf * wh;
        let g = g * height;
        let h = h * width;
        let i = clamp_denominator(den * wh);

        Self {
            m: [
                a / i,
                b / i,
                c / i,
                d / i,
                e / i,
                f / i,
                g / i,
                h / i,
                1.0,
            ],
        }
    }

    /// Same mapping as `affine`.
    pub fn from_affine(affine: Affine) -> Self {
        let [a, b, c, d, e, f] = affine.as_coeffs();
        Self {
            m: [a, c, e, b, d, f, 0.0, 0.0, 1.0],
        }
    }

    /// True when the perspective row is `[0, 0, 1]`.
    pub fn is_affine(&self) -> bool {
        self.m[6] == 0.0 && self.m[7] == 0.0 && self.m[8] == 1.0
    }

    /// The equivalent [`Affine`], if there is no perspective component.
    pub fn to_affine(&self) -> Option<Affine> {
        if !self.is_affine() {
            return None;
        }
        let m = &self.m;
        Some(Affine::new([m[0], m[3], m[1], m[4], m[2], m[5]]))
    }

    pub fn apply(&self, p: Point) -> Point {
        let m = &self.m;
        let w = m[6] * p.x + m[7] * p.y + m[8];
        Point::new(
            (m[0] * p.x + m[1] * p.y + m[2]) / w,
            (m[3] * p.x + m[4] * p.y + m[5]) / w,
        )
    }

    /// Embeds the homography into a 4×4 layer transform, passing `z` through and
    /// placing the perspective terms in the homogeneous row.
    pub fn to_transform3d(&self) -> Transform3d {
        let m = &self.m;
        Transform3d::from_cols(
            [m[0], m[3], 0.0, m[6]],
            [m[1], m[4], 0.0, m[7]],
            [0.0, 0.0, 1.0, 0.0],
            [m[2], m[5], 0.0, m[8]],
        )
    }

    pub fn is_finite(&self) -> bool {
        self.m.iter().all(|v| v.is_finite())
    }
}

/// Keeps `i` at least `DENOMINATOR_EPSILON` in magnitude without flipping the
/// quad's orientation. Zero counts as negative.
fn clamp_denominator(i: f64) -> f64 {
    if i.abs() >= DENOMINATOR_EPSILON {
        i
    } else if i > 0.0 {
        DENOMINATOR_EPSILON
    } else {
        -DENOMINATOR_EPSILON
    }
}

impl Default for Homography {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/projective.rs"]
mod tests;
