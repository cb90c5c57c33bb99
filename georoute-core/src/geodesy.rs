//! Great-circle distances on a spherical Earth.
//!
//! All sequencing decisions are made on Haversine distance over a sphere of
//! mean radius [`EARTH_RADIUS_KM`]. Road networks are never consulted.

use crate::{LatLng, RouteMode};

/// Mean Earth radius used for every distance in the engine.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates in kilometres.
///
/// # Examples
/// ```
/// use georoute_core::{LatLng, haversine_km};
///
/// let origin = LatLng::new(0.0, 0.0);
/// let one_degree_east = LatLng::new(0.0, 1.0);
/// let d = haversine_km(origin, one_degree_east);
/// assert!((d - 111.195).abs() < 0.001);
/// assert_eq!(haversine_km(origin, origin), 0.0);
/// ```
#[must_use]
pub fn haversine_km(from: LatLng, to: LatLng) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let half_dlat = (to.lat - from.lat).to_radians() / 2.0;
    let half_dlng = (to.lng - from.lng).to_radians() / 2.0;

    let a = half_dlat.sin().powi(2) + lat1.cos() * lat2.cos() * half_dlng.sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Length of a tour through `stops`, in kilometres.
///
/// The first edge runs from `start` when one is given. In [`RouteMode::Loop`]
/// the tour closes back onto `start`; without a start there is no closing
/// edge in either mode.
///
/// # Examples
/// ```
/// use georoute_core::{LatLng, RouteMode, haversine_km, tour_length_km};
///
/// let start = LatLng::new(0.0, 0.0);
/// let stops = [LatLng::new(0.0, 1.0)];
/// let one_way = tour_length_km(Some(start), &stops, RouteMode::OneWay);
/// let round_trip = tour_length_km(Some(start), &stops, RouteMode::Loop);
/// assert!((round_trip - 2.0 * one_way).abs() < 1e-9);
/// assert_eq!(tour_length_km(None, &stops, RouteMode::Loop), 0.0);
/// ```
#[must_use]
pub fn tour_length_km(start: Option<LatLng>, stops: &[LatLng], mode: RouteMode) -> f64 {
    let inner: f64 = stops
        .windows(2)
        .map(|pair| match pair {
            [from, to] => haversine_km(*from, *to),
            _ => 0.0,
        })
        .sum();

    let Some(anchor) = start else {
        return inner;
    };
    let outbound = stops.first().map_or(0.0, |first| haversine_km(anchor, *first));
    let inbound = match (mode, stops.last()) {
        (RouteMode::Loop, Some(last)) => haversine_km(*last, anchor),
        _ => 0.0,
    };
    outbound + inner + inbound
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TOLERANCE_KM: f64 = 1e-6;

    #[rstest]
    fn distance_is_symmetric() {
        let banff = LatLng::new(51.1483, -115.57);
        let lake_louise = LatLng::new(51.4167, -116.2167);
        let there = haversine_km(banff, lake_louise);
        let back = haversine_km(lake_louise, banff);
        assert!((there - back).abs() < TOLERANCE_KM);
        assert!(there > 50.0 && there < 60.0, "unexpected distance {there}");
    }

    #[rstest]
    fn antipodal_points_are_half_circumference_apart() {
        let d = haversine_km(LatLng::new(0.0, 0.0), LatLng::new(0.0, 180.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < TOLERANCE_KM);
    }

    #[rstest]
    fn tour_without_stops_is_empty() {
        let start = LatLng::new(10.0, 10.0);
        assert_eq!(tour_length_km(Some(start), &[], RouteMode::Loop), 0.0);
    }

    #[rstest]
    #[case(RouteMode::OneWay, 2.0)]
    #[case(RouteMode::Loop, 4.0)]
    fn tour_counts_start_and_return_edges(#[case] mode: RouteMode, #[case] degrees: f64) {
        let start = LatLng::new(0.0, 0.0);
        let stops = [LatLng::new(0.0, 1.0), LatLng::new(0.0, 2.0)];
        let one_degree = haversine_km(start, LatLng::new(0.0, 1.0));
        let length = tour_length_km(Some(start), &stops, mode);
        assert!((length - degrees * one_degree).abs() < TOLERANCE_KM);
    }
}
