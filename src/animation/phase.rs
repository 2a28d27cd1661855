use crate::foundation::error::{GenieError, GenieResult};

/// Sub-range of normalized animation time in which one phase runs.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PhaseWindow {
    pub start: f64,
    pub end: f64,
}

impl PhaseWindow {
    pub fn new(start: f64, end: f64) -> GenieResult<Self> {
        let w = Self { start, end };
        w.validate()?;
        Ok(w)
    }

    pub fn validate(&self) -> GenieResult<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(GenieError::validation("phase window bounds must be finite"));
        }
        if self.end <= self.start {
            return Err(GenieError::validation(format!(
                "phase window end ({}) must be greater than start ({})",
                self.end, self.start
            )));
        }
        Ok(())
    }

    /// Local progress of normalized time `t` inside the window, clamped to `[0, 1]`.
    pub fn progress(&self, t: f64) -> f64 {
        ((t - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/phase.rs"]
mod tests;
