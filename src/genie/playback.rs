use std::fmt;

use crate::{
    foundation::{core::FrameIndex, error::GenieResult},
    genie::{snapshot::SliceImage, timeline::Timeline},
    transform::matrix::Transform3d,
};

/// Callback run exactly once when a genie animation ends, whether it played,
/// failed, or was dropped by its driver.
pub struct Completion {
    callback: Option<Box<dyn FnOnce() + Send>>,
}

impl Completion {
    pub fn new(f: impl FnOnce() + Send + 'static) -> Self {
        Self {
            callback: Some(Box::new(f)),
        }
    }

    /// Completion with nothing to run.
    pub fn none() -> Self {
        Self { callback: None }
    }

    pub fn fire(mut self) {
        if let Some(f) = self.callback.take() {
            f();
        }
    }
}

impl Default for Completion {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("pending", &self.callback.is_some())
            .finish()
    }
}

impl Drop for Completion {
    fn drop(&mut self) {
        if let Some(f) = self.callback.take() {
            f();
        }
    }
}

/// Slices plus their timeline, handed to a [`PlaybackDriver`].
#[derive(Clone, Debug)]
pub struct Playback {
    /// Slice layers in the same order as `timeline.tracks`.
    pub slices: Vec<SliceImage>,
    pub timeline: Timeline,
}

impl Playback {
    pub fn duration_secs(&self) -> f64 {
        self.timeline.duration_secs
    }

    /// Keys are steps, never interpolated.
    pub fn is_discrete(&self) -> bool {
        true
    }

    pub fn transforms_at(&self, frame: FrameIndex) -> Vec<Transform3d> {
        self.timeline.transforms_at(frame)
    }
}

/// Presentation contract for genie animations.
///
/// The driver owns `completion` and must fire it once playback ends. Dropping it
/// unfired also runs it, so every path completes exactly once.
pub trait PlaybackDriver {
    fn play(&mut self, playback: Playback, completion: Completion) -> GenieResult<()>;
}

/// In-memory driver for tests and debugging: records each playback and
/// completes immediately.
#[derive(Debug, Default)]
pub struct RecordingPlayback {
    pub(crate) played: Vec<Playback>,
}

impl RecordingPlayback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> &[Playback] {
        &self.played
    }
}

impl PlaybackDriver for RecordingPlayback {
    fn play(&mut self, playback: Playback, completion: Completion) -> GenieResult<()> {
        tracing::debug!(
            slices = playback.slices.len(),
            frames = playback.timeline.frame_count,
            "recorded playback"
        );
        self.played.push(playback);
        completion.fire();
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/genie/playback.rs"]
mod tests;
