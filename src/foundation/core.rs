use crate::foundation::error::{GenieError, GenieResult};

pub use kurbo::{Affine, Axis, CubicBez, Point, Rect, Size, Vec2};

/// Serde shape for [`Axis`]; kurbo does not serialize it.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(remote = "Axis", rename_all = "snake_case")]
pub(crate) enum AxisDef {
    Horizontal,
    Vertical,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> GenieResult<Self> {
        if den == 0 {
            return Err(GenieError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(GenieError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 60, den: 1 }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
