use crate::{
    foundation::{core::Rect, error::GenieResult},
    genie::{
        config::GenieConfig,
        playback::{Completion, Playback, PlaybackDriver},
        snapshot::SnapshotProvider,
        timeline::{Direction, GenieRequest, check_travel_direction, compute_genie_timeline},
    },
    geometry::edge::Edge,
};

/// Genie animations of one element.
#[derive(Clone, Debug, PartialEq)]
pub struct GenieEffect {
    pub config: GenieConfig,
    /// Element frame in its parent's coordinate space.
    pub element_frame: Rect,
}

impl GenieEffect {
    pub fn new(element_frame: Rect, config: GenieConfig) -> Self {
        Self {
            config,
            element_frame,
        }
    }

    /// Collapses the element into `destination_rect` through its `destination_edge`.
    pub fn genie_in<S, P>(
        &self,
        duration_secs: f64,
        destination_rect: Rect,
        destination_edge: Edge,
        snapshots: &mut S,
        driver: &mut P,
        on_complete: Completion,
    ) -> GenieResult<()>
    where
        S: SnapshotProvider + ?Sized,
        P: PlaybackDriver + ?Sized,
    {
        self.run(
            Direction::Forward,
            duration_secs,
            destination_rect,
            destination_edge,
            snapshots,
            driver,
            on_complete,
        )
    }

    /// Expands the element out of `start_rect` through its `start_edge`.
    pub fn genie_out<S, P>(
        &self,
        duration_secs: f64,
        start_rect: Rect,
        start_edge: Edge,
        snapshots: &mut S,
        driver: &mut P,
        on_complete: Completion,
    ) -> GenieResult<()>
    where
        S: SnapshotProvider + ?Sized,
        P: PlaybackDriver + ?Sized,
    {
        self.run(
            Direction::Reverse,
            duration_secs,
            start_rect,
            start_edge,
            snapshots,
            driver,
            on_complete,
        )
    }

    #[allow(clippy::too_many_arguments)]
    #[tracing::instrument(skip(self, snapshots, driver, completion))]
    fn run<S, P>(
        &self,
        direction: Direction,
        duration_secs: f64,
        rect: Rect,
        edge: Edge,
        snapshots: &mut S,
        driver: &mut P,
        completion: Completion,
    ) -> GenieResult<()>
    where
        S: SnapshotProvider + ?Sized,
        P: PlaybackDriver + ?Sized,
    {
        let prepared = check_travel_direction(self.element_frame, rect, edge)
            .and_then(|()| snapshots.capture_slices(edge.axis(), &self.config))
            .and_then(|slices| {
                let request = GenieRequest {
                    element_frame: self.element_frame,
                    slices: slices.iter().map(|s| s.size).collect(),
                    edge,
                    destination: rect,
                    duration_secs,
                    direction,
                };
                compute_genie_timeline(&request, &self.config)
                    .map(|timeline| Playback { slices, timeline })
            });

        match prepared {
            Ok(playback) => driver.play(playback, completion),
            Err(e) => {
                tracing::warn!(error = %e, "genie animation aborted");
                completion.fire();
                Err(e)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/genie/effect.rs"]
mod tests;
