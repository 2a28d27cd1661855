//! Hinge edges and their sign/winding conventions.

use std::{fmt, str::FromStr};

use crate::foundation::{
    core::Axis,
    error::{GenieError, GenieResult},
};

/// Edge of the destination rectangle the funnel is anchored to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    /// Minimum-y edge.
    Top,
    /// Minimum-x edge.
    Left,
    /// Maximum-y edge.
    Bottom,
    /// Maximum-x edge.
    Right,
}

/// Logical corner role of a slice quadrilateral, relative to the hinge edge.
///
/// "Near" corners are the ones closer to the hinge along the travel axis; `A`/`B`
/// follow the first/second boundary curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CornerRole {
    NearA,
    NearB,
    FarA,
    FarB,
}

impl CornerRole {
    pub const ALL: [Self; 4] = [Self::NearA, Self::NearB, Self::FarA, Self::FarB];
}

/// Physical vertex slot of a [`Trapezoid`](crate::Trapezoid).
///
/// Slots correspond to the source rectangle corners `(0,0)`, `(w,0)`, `(0,h)`, `(w,h)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QuadSlot {
    A,
    B,
    C,
    D,
}

impl QuadSlot {
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Position of the slot in `a, b, c, d` order.
    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }
}

impl Edge {
    pub const ALL: [Self; 4] = [Self::Top, Self::Left, Self::Bottom, Self::Right];

    /// Travel axis: slices move along Y for top/bottom hinges and along X otherwise.
    pub fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    /// Whether travel runs toward decreasing coordinates.
    pub fn is_negative(self) -> bool {
        matches!(self, Self::Bottom | Self::Right)
    }

    /// `+1.0` or `-1.0` following [`Edge::is_negative`].
    pub fn sign(self) -> f64 {
        if self.is_negative() { -1.0 } else { 1.0 }
    }

    /// Physical slot that receives the vertex playing `role`.
    ///
    /// Keeps the quadrilateral winding identical for every hinge, so the homography
    /// solver always sees vertices in the same relative orientation.
    pub fn winding(self, role: CornerRole) -> QuadSlot {
        use CornerRole::*;
        use QuadSlot::*;

        match (self, role) {
            (Self::Top, NearA) => A,
            (Self::Top, NearB) => B,
            (Self::Top, FarA) => C,
            (Self::Top, FarB) => D,

            (Self::Left, NearA) => C,
            (Self::Left, NearB) => A,
            (Self::Left, FarA) => D,
            (Self::Left, FarB) => B,

            (Self::Bottom, NearA) => D,
            (Self::Bottom, NearB) => C,
            (Self::Bottom, FarA) => B,
            (Self::Bottom, FarB) => A,

            (Self::Right, NearA) => B,
            (Self::Right, NearB) => D,
            (Self::Right, FarA) => A,
            (Self::Right, FarB) => C,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Bottom => "bottom",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Edge {
    type Err = GenieError;

    fn from_str(s: &str) -> GenieResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" | "t" => Ok(Self::Top),
            "left" | "l" => Ok(Self::Left),
            "bottom" | "b" => Ok(Self::Bottom),
            "right" | "r" => Ok(Self::Right),
            other => Err(GenieError::validation(format!("unknown edge '{other}'"))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/edge.rs"]
mod tests;
