//! Frame loop that turns a genie request into per-slice keyframes.

use crate::{
    animation::keyframes::SliceTrack,
    foundation::{
        core::{Affine, Axis, AxisDef, Fps, FrameIndex, Rect, Size},
        error::{GenieError, GenieResult},
        math::Fnv1a64,
    },
    genie::config::GenieConfig,
    geometry::{edge::Edge, segment::Segment},
    sequence::sequencer::{FunnelFrame, sequence_frame},
    transform::{affine::snap_transform, matrix::Transform3d},
};

/// Time direction of a genie animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Element collapses into the destination rect.
    Forward,
    /// Element expands out of the destination rect (forward geometry, time flipped).
    Reverse,
}

/// Everything the frame loop needs about one animation.
#[derive(Clone, Debug, PartialEq)]
pub struct GenieRequest {
    /// Element frame in its parent's coordinate space.
    pub element_frame: Rect,
    /// Slice sizes in points, ordered by increasing travel-axis coordinate. They
    /// already include the render margin on the perpendicular axis.
    pub slices: Vec<Size>,
    pub edge: Edge,
    /// Rect the funnel converges to, in the parent's coordinate space.
    pub destination: Rect,
    pub duration_secs: f64,
    pub direction: Direction,
}

/// Immutable result of [`compute_genie_timeline`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    pub duration_secs: f64,
    pub frame_rate: Fps,
    pub frame_count: usize,
    pub edge: Edge,
    #[serde(with = "AxisDef")]
    pub axis: Axis,
    pub direction: Direction,
    /// One discrete track per slice, in slice order.
    pub tracks: Vec<SliceTrack>,
    /// The element's far edge crosses the destination edge; slices may overlap.
    pub overlap_warning: bool,
    /// Transform applied to the element once playback ends (forward only).
    pub final_snap: Option<Affine>,
}

impl Timeline {
    pub fn slice_count(&self) -> usize {
        self.tracks.len()
    }

    /// Layer transforms of every slice at `frame`.
    pub fn transforms_at(&self, frame: FrameIndex) -> Vec<Transform3d> {
        self.tracks
            .iter()
            .filter_map(|t| t.sample(frame))
            .map(|h| h.to_transform3d())
            .collect()
    }

    /// Hash over the exact bits of every coefficient. Equal fingerprints mean
    /// bit-identical transform tables.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_bytes(self.edge.as_str().as_bytes());
        h.write_u8(u8::from(self.direction == Direction::Reverse));
        h.write_f64(self.duration_secs);
        h.write_u64(self.frame_count as u64);
        h.write_u64(self.tracks.len() as u64);
        for track in &self.tracks {
            for key in &track.keys {
                for v in key.m {
                    h.write_f64(v);
                }
            }
        }
        if let Some(snap) = self.final_snap {
            for v in snap.as_coeffs() {
                h.write_f64(v);
            }
        }
        h.finish()
    }
}

fn inflate_across(rect: Rect, travel: Axis, amount: f64) -> Rect {
    match travel {
        Axis::Horizontal => Rect::new(rect.x0, rect.y0 - amount, rect.x1, rect.y1 + amount),
        Axis::Vertical => Rect::new(rect.x0 - amount, rect.y0, rect.x1 + amount, rect.y1),
    }
}

fn is_finite_rect(rect: Rect) -> bool {
    [rect.x0, rect.y0, rect.x1, rect.y1]
        .iter()
        .all(|v| v.is_finite())
}

fn validate_request(request: &GenieRequest) -> GenieResult<()> {
    if !request.duration_secs.is_finite() || request.duration_secs <= 0.0 {
        return Err(GenieError::validation(format!(
            "duration must be finite and > 0, got {}",
            request.duration_secs
        )));
    }
    if !is_finite_rect(request.element_frame) || !is_finite_rect(request.destination) {
        return Err(GenieError::validation("rects must have finite coordinates"));
    }
    let element = request.element_frame.abs();
    if element.width() <= 0.0 || element.height() <= 0.0 {
        return Err(GenieError::validation("element frame must have a positive size"));
    }
    if request.slices.is_empty() {
        return Err(GenieError::validation("at least one slice is required"));
    }
    for s in &request.slices {
        if !s.width.is_finite() || !s.height.is_finite() || s.width < 0.0 || s.height < 0.0 {
            return Err(GenieError::validation(format!(
                "slice sizes must be finite and >= 0, got {s:?}"
            )));
        }
    }
    Ok(())
}

/// Fails with [`GenieError::Geometry`] unless `destination`'s `edge` lies at or
/// beyond `element`'s `edge` in the edge's travel direction.
pub fn check_travel_direction(element: Rect, destination: Rect, edge: Edge) -> GenieResult<()> {
    let axis = edge.axis();
    let source = Segment::from_rect_edge(element.abs(), edge);
    let dest = Segment::from_rect_edge(destination.abs(), edge);
    if edge.sign() * (source.a.get_coord(axis) - dest.a.get_coord(axis)) > 0.0 {
        return Err(GenieError::geometry(format!(
            "{edge} edge of the element lies past the {edge} edge of the destination rect \
             for the requested travel direction"
        )));
    }
    Ok(())
}

/// Computes every slice transform for every frame of one genie animation.
///
/// Fails with [`GenieError::Geometry`] when the destination lies behind the
/// element for the edge's travel direction. The computation is deterministic:
/// identical inputs give bit-identical timelines.
#[tracing::instrument(skip(request, config), fields(edge = %request.edge, slices = request.slices.len()))]
pub fn compute_genie_timeline(
    request: &GenieRequest,
    config: &GenieConfig,
) -> GenieResult<Timeline> {
    config.validate()?;
    validate_request(request)?;

    let edge = request.edge;
    let axis = edge.axis();
    let perp = axis.cross();
    let sign = edge.sign();

    let element = request.element_frame.abs();
    let destination = request.destination.abs();

    let margin = config.render_margin;
    let dest_margin = margin * destination.size().get_coord(perp) / element.size().get_coord(perp);
    let source_rect = inflate_across(element, axis, margin);
    let dest_rect = inflate_across(destination, axis, dest_margin);

    let source = Segment::from_rect_edge(source_rect, edge);
    let dest = Segment::from_rect_edge(dest_rect, edge);
    let start = source.with_axis_coord(axis, dest.a.get_coord(axis), dest.b.get_coord(axis));
    let final_depth = dest_rect.size().get_coord(axis);

    check_travel_direction(element, destination, edge)?;

    let total: f64 = request.slices.iter().map(|s| s.get_coord(axis)).sum();
    let overlap_warning = sign * (source.a.get_coord(axis) + sign * total - dest.a.get_coord(axis)) > 0.0;
    if overlap_warning {
        tracing::warn!(
            %edge,
            "element's far side overlaps the {edge} edge of the destination rect; slices may glitch"
        );
    }

    let frame_count = usize::try_from(config.frame_rate.secs_to_frames_floor(request.duration_secs))
        .unwrap_or(usize::MAX)
        .max(1);
    tracing::debug!(frame_count, total_travel = total, "sequencing genie frames");

    let curve_phase = config.curve_phase();
    let slide_phase = config.slide_phase();

    let mut first = Segment::new(source.a, start.a);
    let mut second = Segment::new(source.b, start.b);
    let mut tracks: Vec<SliceTrack> = (0..request.slices.len())
        .map(|_| SliceTrack::with_capacity(frame_count))
        .collect();

    for i in 0..frame_count {
        let progress = if frame_count == 1 {
            1.0
        } else {
            i as f64 / (frame_count - 1) as f64
        };
        let t = match request.direction {
            Direction::Forward => progress,
            Direction::Reverse => 0.5 - (progress - 0.5),
        };

        let curve_p = curve_phase.progress(t);
        first.b.set_coord(
            perp,
            config
                .curve_ease
                .interpolate(curve_p, start.a.get_coord(perp), dest.a.get_coord(perp)),
        );
        second.b.set_coord(
            perp,
            config
                .curve_ease
                .interpolate(curve_p, start.b.get_coord(perp), dest.b.get_coord(perp)),
        );

        let slide_p = slide_phase.progress(t);
        let start_position =
            config
                .slide_ease
                .interpolate(slide_p, first.a.get_coord(axis), first.b.get_coord(axis));

        let frame = FunnelFrame {
            edge,
            start_position,
            total_travel_size: total,
            first,
            second,
            final_depth,
        };
        for (track, warp) in tracks.iter_mut().zip(sequence_frame(&request.slices, &frame)) {
            track.push(warp.homography);
        }
    }

    let final_snap = match request.direction {
        Direction::Forward => Some(snap_transform(element, destination)),
        Direction::Reverse => None,
    };

    Ok(Timeline {
        duration_secs: request.duration_secs,
        frame_rate: config.frame_rate,
        frame_count,
        edge,
        axis,
        direction: request.direction,
        tracks,
        overlap_warning,
        final_snap,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/genie/timeline.rs"]
mod tests;
