use crate::{
    animation::{ease::Ease, phase::PhaseWindow},
    foundation::{
        core::Fps,
        error::{GenieError, GenieResult},
    },
};

/// Tunables of the genie effect.
///
/// Every field has a default, so JSON configs only need the keys they change.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenieConfig {
    /// Normalized time at which the funnel mouth starts to move.
    pub curve_phase_start: f64,
    /// Normalized time at which the funnel mouth reaches its end shape.
    pub curve_phase_end: f64,
    /// Normalized time at which the slice stack starts sliding.
    pub slide_phase_start: f64,
    /// Normalized time at which the slice stack reaches the destination edge.
    pub slide_phase_end: f64,
    /// Slice thickness along the travel axis, in points.
    pub slice_thickness: f64,
    pub frame_rate: Fps,
    /// Transparent border rendered around the element on the perpendicular axis,
    /// in points, so warped slice edges stay antialiased.
    pub render_margin: f64,
    pub curve_ease: Ease,
    pub slide_ease: Ease,
}

impl Default for GenieConfig {
    fn default() -> Self {
        Self {
            curve_phase_start: 0.0,
            curve_phase_end: 0.4,
            slide_phase_start: 0.3,
            slide_phase_end: 0.4,
            slice_thickness: 10.0,
            frame_rate: Fps::default(),
            render_margin: 5.0,
            curve_ease: Ease::SmoothStep,
            slide_ease: Ease::SmoothStep,
        }
    }
}

impl GenieConfig {
    pub fn from_json_str(s: &str) -> GenieResult<Self> {
        let config: Self = serde_json::from_str(s).map_err(|e| GenieError::serde(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn curve_phase(&self) -> PhaseWindow {
        PhaseWindow {
            start: self.curve_phase_start,
            end: self.curve_phase_end,
        }
    }

    pub fn slide_phase(&self) -> PhaseWindow {
        PhaseWindow {
            start: self.slide_phase_start,
            end: self.slide_phase_end,
        }
    }

    pub fn validate(&self) -> GenieResult<()> {
        self.curve_phase()
            .validate()
            .map_err(|e| GenieError::validation(format!("curve phase: {e}")))?;
        self.slide_phase()
            .validate()
            .map_err(|e| GenieError::validation(format!("slide phase: {e}")))?;

        if !self.slice_thickness.is_finite() || self.slice_thickness <= 0.0 {
            return Err(GenieError::validation(format!(
                "slice_thickness must be finite and > 0, got {}",
                self.slice_thickness
            )));
        }
        if !self.render_margin.is_finite() || self.render_margin < 0.0 {
            return Err(GenieError::validation(format!(
                "render_margin must be finite and >= 0, got {}",
                self.render_margin
            )));
        }
        Fps::new(self.frame_rate.num, self.frame_rate.den)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/genie/config.rs"]
mod tests;
