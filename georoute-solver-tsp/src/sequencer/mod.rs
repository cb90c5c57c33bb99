//! `TourSequencer` implementation.

use georoute_core::{
    LatLng, OptimizeRequest, OptimizedRoute, Point, RouteMode, RouteSequencer, SequenceError,
    SequencePlan, tour_length_km,
};

use crate::construction::nearest_neighbour;
use crate::improvement::TwoOpt;

/// Configuration for [`TourSequencer`].
#[derive(Debug, Clone, PartialEq)]
pub struct TourSequencerConfig {
    /// Minimum saving, in kilometres, for a 2-opt reversal to be applied.
    pub improvement_threshold_km: f64,
    /// Run the 2-opt pass after construction.
    ///
    /// Disabling it returns the nearest-neighbour tour, which is mainly
    /// useful for comparing the two stages.
    pub two_opt: bool,
}

impl Default for TourSequencerConfig {
    fn default() -> Self {
        Self {
            improvement_threshold_km: 0.001,
            two_opt: true,
        }
    }
}

/// Nearest-neighbour plus 2-opt sequencer over great-circle distances.
///
/// The sequencer holds no per-request state and can be shared freely across
/// threads.
///
/// # Examples
/// ```
/// use georoute_core::{OptimizeRequest, Point, RouteMode, RouteSequencer};
/// use georoute_solver_tsp::TourSequencer;
///
/// let request = OptimizeRequest {
///     points: vec![
///         Point::new("b", "Far", 0.0, 10.0),
///         Point::new("a", "Near", 0.0, 1.0),
///     ],
///     start_location: Some(Point::new("start", "Hotel", 0.0, 0.0)),
///     route_mode: RouteMode::OneWay,
///     ..OptimizeRequest::default()
/// };
/// let route = TourSequencer::new().optimize(&request)?;
/// assert_eq!(route.sequence, ["a", "b"]);
/// # Ok::<(), georoute_core::SequenceError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TourSequencer {
    config: TourSequencerConfig,
}

impl TourSequencer {
    /// Construct a sequencer using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a sequencer with explicit configuration.
    #[must_use]
    pub const fn with_config(config: TourSequencerConfig) -> Self {
        Self { config }
    }

    /// The sequencer's configuration.
    #[must_use]
    pub const fn config(&self) -> &TourSequencerConfig {
        &self.config
    }

    fn optimise(&self, request: &OptimizeRequest) -> Vec<String> {
        let stops: Vec<LatLng> = request.points.iter().map(Point::position).collect();
        let start = request.start_location.as_ref().map(Point::position);

        let mut tour = nearest_neighbour(start, &stops);
        log_tour_length("nearest-neighbour", start, &stops, &tour, request.route_mode);

        if self.config.two_opt {
            let closes = start.is_some() && request.route_mode.returns_to_start();
            let stats = TwoOpt::new(
                &stops,
                start,
                closes,
                self.config.improvement_threshold_km,
            )
            .improve(&mut tour);
            log::debug!(
                "2-opt finished after {} sweeps with {} reversals",
                stats.sweeps,
                stats.reversals
            );
            log_tour_length("2-opt", start, &stops, &tour, request.route_mode);
        }

        tour.into_iter()
            .filter_map(|index| request.points.get(index))
            .map(|point| point.id.clone())
            .collect()
    }
}

impl RouteSequencer for TourSequencer {
    fn optimize(&self, request: &OptimizeRequest) -> Result<OptimizedRoute, SequenceError> {
        let plan = request.validate()?;
        let sequence = match plan {
            SequencePlan::Optimise => self.optimise(request),
            SequencePlan::Manual(ids) => ids.to_vec(),
            SequencePlan::InputOrder => request.points.iter().map(|p| p.id.clone()).collect(),
        };
        log::debug!(
            "sequenced {} stops ({:?}, {})",
            sequence.len(),
            plan,
            request.route_mode
        );
        Ok(OptimizedRoute::new(sequence, request.route_mode))
    }
}

fn log_tour_length(
    stage: &str,
    start: Option<LatLng>,
    stops: &[LatLng],
    tour: &[usize],
    mode: RouteMode,
) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    let ordered: Vec<LatLng> = tour.iter().filter_map(|&i| stops.get(i)).copied().collect();
    log::debug!(
        "{stage} tour: {:.3} km over {} stops",
        tour_length_km(start, &ordered, mode),
        ordered.len()
    );
}
