//! Core domain types for the GeoRoute trip planner.
//!
//! The crate defines the request-scoped data model (points, route modes,
//! optimised routes, lodging zones), great-circle geodesy, and the traits
//! implemented by the sequencing engine and itinerary renderer. Request
//! types validate at the boundary so engines can assume well-formed input.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod geodesy;
pub mod itinerary;
pub mod lodging;
mod point;
mod route;
pub mod sequencer;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use geodesy::{EARTH_RADIUS_KM, haversine_km, tour_length_km};
pub use itinerary::{
    ExportRequest, ExportRequestError, ItineraryRenderer, ItineraryRequest, RenderError,
};
pub use lodging::{
    BookingLinks, CentroidCalculator, DEFAULT_BUFFER_RADIUS_KM, GeometricCentroid, LodgingError,
    LodgingRequest, LodgingZone,
};
pub use point::{LatLng, Point, PointIndex};
pub use route::{OptimizedRoute, RouteLeg, RouteMetrics, RouteMode, RouteModeParseError};
pub use sequencer::{OptimizeRequest, RouteSequencer, SequenceError, SequencePlan};
