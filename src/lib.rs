//! Facade crate for the GeoRoute trip planner.
//!
//! This crate re-exports the core domain types and exposes the default
//! sequencing engine and PDF renderer behind feature flags.

#![forbid(unsafe_code)]

pub use georoute_core::{
    BookingLinks, CentroidCalculator, DEFAULT_BUFFER_RADIUS_KM, EARTH_RADIUS_KM, ExportRequest,
    ExportRequestError, GeometricCentroid, ItineraryRenderer, ItineraryRequest, LatLng,
    LodgingError, LodgingRequest, LodgingZone, OptimizeRequest, OptimizedRoute, Point, PointIndex,
    RenderError, RouteLeg, RouteMetrics, RouteMode, RouteModeParseError, RouteSequencer,
    SequenceError, SequencePlan, haversine_km, tour_length_km,
};

#[cfg(feature = "test-support")]
pub use georoute_core::test_support;

#[cfg(feature = "solver-tsp")]
pub use georoute_solver_tsp::{TourSequencer, TourSequencerConfig};

#[cfg(feature = "export-pdf")]
pub use georoute_export::{
    ExportInitError, ExportSettings, PageSize, PageSizeParseError, PdfItineraryRenderer,
};
