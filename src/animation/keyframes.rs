use crate::{
    foundation::core::{Fps, FrameIndex},
    transform::{matrix::Transform3d, projective::Homography},
};

/// Per-slice discrete keyframes: key `i` holds from frame `i` until frame `i + 1`.
///
/// Players step between keys; nothing is interpolated.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SliceTrack {
    pub keys: Vec<Homography>, // one per frame
}

impl SliceTrack {
    pub fn with_capacity(frames: usize) -> Self {
        Self {
            keys: Vec::with_capacity(frames),
        }
    }

    pub fn push(&mut self, key: Homography) {
        self.keys.push(key);
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Key in effect at `frame`; the last key holds past the end.
    pub fn sample(&self, frame: FrameIndex) -> Option<&Homography> {
        let last = self.keys.len().checked_sub(1)?;
        let idx = usize::try_from(frame.0).map_or(last, |f| f.min(last));
        self.keys.get(idx)
    }

    /// Key in effect `secs` after playback starts.
    pub fn sample_secs(&self, fps: Fps, secs: f64) -> Option<&Homography> {
        self.sample(FrameIndex(fps.secs_to_frames_floor(secs)))
    }

    /// Keys embedded as layer transforms, in frame order.
    pub fn transforms_3d(&self) -> Vec<Transform3d> {
        self.keys.iter().map(Homography::to_transform3d).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;
