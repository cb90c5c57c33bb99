//! Nearest-neighbour tour construction.

use georoute_core::{LatLng, haversine_km};

/// Build a tour by repeatedly visiting the closest unvisited stop.
///
/// The walk begins at `origin`, or at the first stop when no origin is
/// given. Stops are scanned in input order and only a strictly shorter
/// distance displaces the current best, so the earliest stop wins ties.
/// Returns indices into `stops`.
pub(crate) fn nearest_neighbour(origin: Option<LatLng>, stops: &[LatLng]) -> Vec<usize> {
    let Some(mut current) = origin.or_else(|| stops.first().copied()) else {
        return Vec::new();
    };

    let mut unvisited: Vec<(usize, LatLng)> = stops.iter().copied().enumerate().collect();
    let mut tour = Vec::with_capacity(stops.len());

    loop {
        let nearest = unvisited
            .iter()
            .enumerate()
            .map(|(slot, &(_, stop))| (slot, haversine_km(current, stop)))
            .min_by(|(_, lhs), (_, rhs)| lhs.total_cmp(rhs))
            .map(|(slot, _)| slot);
        let Some(slot) = nearest else {
            break;
        };
        let (index, stop) = unvisited.remove(slot);
        tour.push(index);
        current = stop;
    }

    tour
}
