//! Proptest strategies for sequencer property-based tests.
//!
//! Generated requests always satisfy the sequencer's preconditions: ids are
//! unique and coordinates lie inside the WGS84 ranges.

use georoute_core::{LatLng, OptimizeRequest, OptimizedRoute, Point, RouteMode, tour_length_km};
use proptest::prelude::*;

/// Strategy for a request with between `min_count` and `max_count` points.
///
/// Points are spread over a city-sized area so that great-circle distances
/// stay well above the 2-opt threshold.
pub fn request_strategy(
    min_count: usize,
    max_count: usize,
) -> impl Strategy<Value = OptimizeRequest> {
    let points = (min_count..=max_count).prop_flat_map(|count| {
        proptest::collection::vec(coordinate_strategy(), count).prop_map(|coords| {
            coords
                .into_iter()
                .enumerate()
                .map(|(idx, (lat, lng))| {
                    Point::new(format!("p{idx}"), format!("Stop {idx}"), lat, lng)
                })
                .collect::<Vec<_>>()
        })
    });
    let start = proptest::option::of(
        coordinate_strategy().prop_map(|(lat, lng)| Point::new("start", "Start", lat, lng)),
    );
    let mode = prop_oneof![Just(RouteMode::Loop), Just(RouteMode::OneWay)];

    (points, start, mode).prop_map(|(points, start_location, route_mode)| OptimizeRequest {
        points,
        start_location,
        route_mode,
        ..OptimizeRequest::default()
    })
}

fn coordinate_strategy() -> impl Strategy<Value = (f64, f64)> {
    (48.0_f64..48.3_f64, 2.2_f64..2.5_f64)
}

/// Tour length of `route` under the request's start and mode.
pub fn route_length_km(request: &OptimizeRequest, route: &OptimizedRoute) -> f64 {
    tour_length_km(
        request.start_location.as_ref().map(Point::position),
        &route_positions(request, route),
        request.route_mode,
    )
}

/// Positions of `route`'s stops in visiting order.
pub fn route_positions(request: &OptimizeRequest, route: &OptimizedRoute) -> Vec<LatLng> {
    route
        .sequence
        .iter()
        .filter_map(|id| request.points.iter().find(|p| &p.id == id))
        .map(Point::position)
        .collect()
}
