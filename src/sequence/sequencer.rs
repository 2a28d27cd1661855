//! Per-frame slice quadrilaterals along the funnel.

use crate::{
    foundation::core::{Size},
    geometry::{
        curve::intersect_at_axis_position,
        edge::{CornerRole, Edge},
        segment::CubicCurve,
        trapezoid::Trapezoid,
    },
    transform::projective::Homography,
};

/// Funnel state for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FunnelFrame {
    pub edge: Edge,
    /// Travel-axis coordinate of the slice stack's leading edge.
    pub start_position: f64,
    /// Summed slice thickness along the travel axis.
    pub total_travel_size: f64,
    /// Boundary curves; `b` endpoints sit on the destination edge.
    pub first: CubicCurve,
    pub second: CubicCurve,
    /// Destination depth along the travel axis that overflowing slices compress into.
    pub final_depth: f64,
}

/// Where one slice lands in one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliceWarp {
    /// Travel position of the slice's near side.
    pub near: f64,
    /// Travel position of the slice's far side, before compression.
    pub far: f64,
    pub trapezoid: Trapezoid,
    pub homography: Homography,
}

/// Warps every slice for one frame.
///
/// `slices` are ordered by increasing travel-axis coordinate and the result uses
/// the same order. Negative edges are walked in reverse so "near" is always the
/// side toward the hinge.
///
/// # Panics
///
/// Panics if `start_position` lies past the destination edge in the travel
/// direction, or if a slice has negative or non-finite thickness.
pub fn sequence_frame(slices: &[Size], frame: &FunnelFrame) -> Vec<SliceWarp> {
    let edge = frame.edge;
    let axis = edge.axis();
    let sign = edge.sign();
    let rect_part_start = frame.first.b.get_coord(axis);

    assert!(
        sign * (frame.start_position - rect_part_start) <= 0.0,
        "slice stack starts at {} past destination edge {rect_part_start} ({edge})",
        frame.start_position
    );

    let mut position = frame.start_position;
    let mut trapezoid = Trapezoid::default();
    trapezoid.set_corner(
        edge,
        CornerRole::NearA,
        intersect_at_axis_position(&frame.first, axis, position),
    );
    trapezoid.set_corner(
        edge,
        CornerRole::NearB,
        intersect_at_axis_position(&frame.second, axis, position),
    );

    let ordered: Vec<&Size> = if edge.is_negative() {
        slices.iter().rev().collect()
    } else {
        slices.iter().collect()
    };

    let mut warps = Vec::with_capacity(slices.len());
    for slice in ordered {
        let size = slice.get_coord(axis);
        assert!(
            size.is_finite() && size >= 0.0,
            "slice thickness must be finite and >= 0, got {size}"
        );

        let end_position = position + sign * size;
        let overflow = sign * (end_position - rect_part_start);

        if overflow <= 0.0 {
            trapezoid.set_corner(
                edge,
                CornerRole::FarA,
                intersect_at_axis_position(&frame.first, axis, end_position),
            );
            trapezoid.set_corner(
                edge,
                CornerRole::FarB,
                intersect_at_axis_position(&frame.second, axis, end_position),
            );
        } else {
            // Past the mouth: squeeze the remaining depth into the destination rect.
            let shrunk = overflow * frame.final_depth / frame.total_travel_size;
            let mut far_a = frame.first.b;
            far_a.set_coord(axis, far_a.get_coord(axis) + sign * shrunk);
            let mut far_b = frame.second.b;
            far_b.set_coord(axis, far_b.get_coord(axis) + sign * shrunk);
            trapezoid.set_corner(edge, CornerRole::FarA, far_a);
            trapezoid.set_corner(edge, CornerRole::FarB, far_b);
        }

        warps.push(SliceWarp {
            near: position,
            far: end_position,
            trapezoid,
            homography: Homography::rect_to_quad(slice.width, slice.height, &trapezoid),
        });

        trapezoid.advance(edge);
        position = end_position;
    }

    if edge.is_negative() {
        warps.reverse();
    }
    warps
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/sequencer.rs"]
mod tests;
