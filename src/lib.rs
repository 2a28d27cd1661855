//! Genie is the funnel warp behind "minimize to dock" style animations.
//!
//! An element is cut into thin slices along the travel axis. Each frame, two
//! cubic boundary curves form a funnel from the element's edge to a
//! destination rectangle, and every slice is warped onto the quadrilateral it
//! occupies inside that funnel. The output is a [`Timeline`]: one discrete
//! projective keyframe track per slice.
//!
//! - Describe the motion with a [`GenieRequest`] and a [`GenieConfig`]
//! - Compute it with [`compute_genie_timeline`]
//! - Or let [`GenieEffect`] capture slices through a [`SnapshotProvider`] and
//!   hand the result to a [`PlaybackDriver`]
#![forbid(unsafe_code)]

pub mod animation;
pub mod foundation;
pub mod genie;
pub mod geometry;
pub mod sequence;
pub mod transform;

pub use crate::animation::{ease::Ease, keyframes::SliceTrack, phase::PhaseWindow};
pub use crate::foundation::core::{Affine, Axis, CubicBez, Fps, FrameIndex, Point, Rect, Size, Vec2};
pub use crate::foundation::error::{GenieError, GenieResult};
pub use crate::genie::config::GenieConfig;
pub use crate::genie::effect::GenieEffect;
pub use crate::genie::playback::{Completion, Playback, PlaybackDriver, RecordingPlayback};
pub use crate::genie::snapshot::{RasterSnapshot, SliceImage, SnapshotProvider, slice_sizes};
pub use crate::genie::timeline::{
    Direction, GenieRequest, Timeline, check_travel_direction, compute_genie_timeline,
};
pub use crate::geometry::curve::{intersect_at_axis_position, parameter_at_axis_position};
pub use crate::geometry::edge::{CornerRole, Edge, QuadSlot};
pub use crate::geometry::segment::{CubicCurve, Segment, control_points};
pub use crate::geometry::trapezoid::Trapezoid;
pub use crate::sequence::sequencer::{FunnelFrame, SliceWarp, sequence_frame};
pub use crate::transform::{
    affine::snap_transform, matrix::Transform3d, projective::Homography,
};
