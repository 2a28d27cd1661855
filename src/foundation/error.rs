/// Convenience result type used across the genie engine.
pub type GenieResult<T> = Result<T, GenieError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum GenieError {
    /// Invalid caller-provided configuration, durations or slice data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Source and destination rectangles are arranged so the funnel cannot travel.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// The snapshot collaborator could not produce slice images.
    #[error("snapshot error: {0}")]
    Snapshot(String),

    /// The playback collaborator refused or failed to run a timeline.
    #[error("playback error: {0}")]
    Playback(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GenieError {
    /// Build a [`GenieError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GenieError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`GenieError::Snapshot`] value.
    pub fn snapshot(msg: impl Into<String>) -> Self {
        Self::Snapshot(msg.into())
    }

    /// Build a [`GenieError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
