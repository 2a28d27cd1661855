//! Affine transform helpers.

use crate::foundation::core::{Affine, Rect, Vec2};

/// Affine map (translate + non-uniform scale) taking `from` exactly onto `to`,
/// both in the same parent coordinate space.
///
/// A zero-sized `from` axis keeps scale `1.0` on that axis.
pub fn snap_transform(from: Rect, to: Rect) -> Affine {
    let sx = if from.width() == 0.0 {
        1.0
    } else {
        to.width() / from.width()
    };
    let sy = if from.height() == 0.0 {
        1.0
    } else {
        to.height() / from.height()
    };

    Affine::translate(Vec2::new(to.x0, to.y0))
        * Affine::scale_non_uniform(sx, sy)
        * Affine::translate(Vec2::new(-from.x0, -from.y0))
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
