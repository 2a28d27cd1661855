use super::*;
use crate::{
    foundation::{
        core::{Axis, Point},
        error::GenieError,
    },
    genie::{
        playback::RecordingPlayback,
        snapshot::{RasterSnapshot, SliceImage},
    },
};
use image::{Rgba, RgbaImage};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

fn counter() -> (Arc<AtomicUsize>, Completion) {
    let hits = Arc::new(AtomicUsize::new(0));
    let h = Arc::clone(&hits);
    (
        hits,
        Completion::new(move || {
            h.fetch_add(1, Ordering::SeqCst);
        }),
    )
}

fn window() -> (GenieEffect, RasterSnapshot) {
    let effect = GenieEffect::new(Rect::new(100.0, 100.0, 300.0, 300.0), GenieConfig::default());
    let raster = RgbaImage::from_pixel(200, 200, Rgba([10, 20, 30, 255]));
    (effect, RasterSnapshot::new(raster, 1.0).unwrap())
}

struct BrokenSnapshots {
    calls: usize,
}

impl SnapshotProvider for BrokenSnapshots {
    fn capture_slices(
        &mut self,
        _axis: Axis,
        _config: &GenieConfig,
    ) -> GenieResult<Vec<SliceImage>> {
        self.calls += 1;
        Err(GenieError::snapshot("layer has no backing store"))
    }
}

#[test]
fn genie_in_hands_a_forward_playback_to_the_driver() {
    let (effect, mut snapshots) = window();
    let mut driver = RecordingPlayback::new();
    let (hits, done) = counter();

    effect
        .genie_in(
            0.5,
            Rect::new(180.0, 600.0, 220.0, 640.0),
            Edge::Top,
            &mut snapshots,
            &mut driver,
            done,
        )
        .unwrap();

    assert_eq!(hits.load(Ordering::SeqCst), 1);
    let played = &driver.played()[0];
    assert_eq!(played.slices.len(), 20);
    assert_eq!(played.timeline.slice_count(), 20);
    assert_eq!(played.timeline.direction, Direction::Forward);
    assert_eq!(played.duration_secs(), 0.5);
    assert!(played.timeline.final_snap.is_some());

    let first = played.transforms_at(crate::foundation::core::FrameIndex(0));
    let p = first[0].transform_point(Point::new(0.0, 0.0));
    assert!((p.x - 95.0).abs() < 1e-6 && (p.y - 100.0).abs() < 1e-6, "{p:?}");
}

#[test]
fn genie_out_runs_in_reverse_without_a_snap() {
    let (effect, mut snapshots) = window();
    let mut driver = RecordingPlayback::new();
    effect
        .genie_out(
            0.25,
            Rect::new(0.0, 150.0, 20.0, 170.0),
            Edge::Right,
            &mut snapshots,
            &mut driver,
            Completion::none(),
        )
        .unwrap();

    let played = &driver.played()[0];
    assert_eq!(played.timeline.direction, Direction::Reverse);
    assert_eq!(played.timeline.axis, Axis::Horizontal);
    assert_eq!(played.timeline.final_snap, None);
    assert_eq!(played.timeline.frame_count, 15);
}

#[test]
fn wrong_side_destination_aborts_before_capture() {
    let (effect, _) = window();
    let mut snapshots = BrokenSnapshots { calls: 0 };
    let mut driver = RecordingPlayback::new();
    let (hits, done) = counter();

    let err = effect
        .genie_in(
            0.5,
            Rect::new(100.0, 50.0, 140.0, 400.0),
            Edge::Top,
            &mut snapshots,
            &mut driver,
            done,
        )
        .unwrap_err();

    assert!(matches!(err, GenieError::Geometry(_)));
    assert_eq!(snapshots.calls, 0);
    assert!(driver.played().is_empty());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn snapshot_failure_completes_and_reports() {
    let (effect, _) = window();
    let mut snapshots = BrokenSnapshots { calls: 0 };
    let mut driver = RecordingPlayback::new();
    let (hits, done) = counter();

    let err = effect
        .genie_in(
            0.5,
            Rect::new(180.0, 600.0, 220.0, 640.0),
            Edge::Top,
            &mut snapshots,
            &mut driver,
            done,
        )
        .unwrap_err();

    assert!(matches!(err, GenieError::Snapshot(_)));
    assert_eq!(snapshots.calls, 1);
    assert!(driver.played().is_empty());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}
