//! Shared application state.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use georoute_core::{CentroidCalculator, ItineraryRenderer, RouteSequencer};

use crate::config::DEFAULT_OPTIMIZE_TIMEOUT;

/// Engines shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub(crate) sequencer: Arc<dyn RouteSequencer>,
    pub(crate) calculator: Arc<dyn CentroidCalculator>,
    pub(crate) renderer: Arc<dyn ItineraryRenderer>,
    pub(crate) optimize_timeout: Duration,
}

impl AppState {
    /// Wire the three engines with the default sequencing deadline.
    pub fn new(
        sequencer: impl RouteSequencer + 'static,
        calculator: impl CentroidCalculator + 'static,
        renderer: impl ItineraryRenderer + 'static,
    ) -> Self {
        Self {
            sequencer: Arc::new(sequencer),
            calculator: Arc::new(calculator),
            renderer: Arc::new(renderer),
            optimize_timeout: DEFAULT_OPTIMIZE_TIMEOUT,
        }
    }

    /// Replace the per-request sequencing deadline.
    #[must_use]
    pub const fn with_optimize_timeout(mut self, timeout: Duration) -> Self {
        self.optimize_timeout = timeout;
        self
    }

    /// The per-request sequencing deadline.
    #[must_use]
    pub const fn optimize_timeout(&self) -> Duration {
        self.optimize_timeout
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("optimize_timeout", &self.optimize_timeout)
            .finish_non_exhaustive()
    }
}
