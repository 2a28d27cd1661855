use crate::{
    foundation::core::Point,
    geometry::edge::{CornerRole, Edge, QuadSlot},
};

/// Destination quadrilateral of one slice.
///
/// Vertices `a, b, c, d` receive the slice rectangle corners `(0,0)`, `(w,0)`,
/// `(0,h)`, `(w,h)` respectively. Filling them through [`Edge::winding`] keeps the
/// outline simple for every hinge edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Trapezoid {
    pub a: Point,
    pub b: Point,
    pub c: Point,
    pub d: Point,
}

impl Trapezoid {
    pub fn new(a: Point, b: Point, c: Point, d: Point) -> Self {
        Self { a, b, c, d }
    }

    pub fn slot(&self, slot: QuadSlot) -> Point {
        self.points()[slot.index()]
    }

    pub fn set_slot(&mut self, slot: QuadSlot, p: Point) {
        match slot {
            QuadSlot::A => self.a = p,
            QuadSlot::B => self.b = p,
            QuadSlot::C => self.c = p,
            QuadSlot::D => self.d = p,
        }
    }

    /// Vertex currently playing `role` for hinge `edge`.
    pub fn corner(&self, edge: Edge, role: CornerRole) -> Point {
        self.slot(edge.winding(role))
    }

    pub fn set_corner(&mut self, edge: Edge, role: CornerRole, p: Point) {
        self.set_slot(edge.winding(role), p);
    }

    /// Moves the far pair into the near roles, ready for the next slice.
    pub fn advance(&mut self, edge: Edge) {
        let far_a = self.corner(edge, CornerRole::FarA);
        let far_b = self.corner(edge, CornerRole::FarB);
        self.set_corner(edge, CornerRole::NearA, far_a);
        self.set_corner(edge, CornerRole::NearB, far_b);
    }

    /// Vertices in `a, b, c, d` order.
    pub fn points(&self) -> [Point; 4] {
        [self.a, self.b, self.c, self.d]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/trapezoid.rs"]
mod tests;
