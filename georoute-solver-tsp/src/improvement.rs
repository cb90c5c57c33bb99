//! 2-opt local search over a constructed tour.

use georoute_core::{LatLng, haversine_km};

/// Edge costs and boundary policy for a 2-opt pass.
///
/// The start location sits at a virtual position before the first slot. Edges
/// touching it cost nothing when there is no start. The edge leaving the last
/// slot exists only when `closes` is set, that is a loop with a start.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TwoOpt<'a> {
    stops: &'a [LatLng],
    start: Option<LatLng>,
    closes: bool,
    threshold_km: f64,
}

/// Counters reported by [`TwoOpt::improve`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ImprovementStats {
    /// Full sweeps over all slot pairs, including the final quiet sweep.
    pub(crate) sweeps: usize,
    /// Segment reversals applied.
    pub(crate) reversals: usize,
}

impl<'a> TwoOpt<'a> {
    pub(crate) const fn new(
        stops: &'a [LatLng],
        start: Option<LatLng>,
        closes: bool,
        threshold_km: f64,
    ) -> Self {
        Self {
            stops,
            start,
            closes,
            threshold_km,
        }
    }

    /// Improve `tour` in place until a sweep finds no worthwhile reversal.
    ///
    /// A reversal of slots `a..=j` is applied when it saves more than the
    /// threshold; later pairs in the same sweep see the updated order. Tours
    /// with fewer than three stops are returned untouched.
    #[expect(
        clippy::float_arithmetic,
        reason = "2-opt compares sums of great-circle edge lengths"
    )]
    pub(crate) fn improve(&self, tour: &mut [usize]) -> ImprovementStats {
        let mut stats = ImprovementStats::default();
        let len = tour.len();
        if len < 3 {
            return stats;
        }

        let mut improved = true;
        while improved {
            improved = false;
            stats.sweeps += 1;
            for a in 0..len - 1 {
                for j in a + 1..len {
                    let (Some(first), Some(last)) = (self.at(tour, a), self.at(tour, j)) else {
                        continue;
                    };
                    let before = self.before(tour, a);
                    let after = self.after(tour, j);

                    let current = edge_km(before, first) + edge_km(after, last);
                    let swapped = edge_km(before, last) + edge_km(after, first);

                    if swapped < current - self.threshold_km
                        && let Some(segment) = tour.get_mut(a..=j)
                    {
                        segment.reverse();
                        stats.reversals += 1;
                        improved = true;
                    }
                }
            }
        }

        stats
    }

    fn at(&self, tour: &[usize], slot: usize) -> Option<LatLng> {
        tour.get(slot).and_then(|&index| self.stops.get(index)).copied()
    }

    fn before(&self, tour: &[usize], slot: usize) -> Option<LatLng> {
        match slot.checked_sub(1) {
            Some(previous) => self.at(tour, previous),
            None => self.start,
        }
    }

    fn after(&self, tour: &[usize], slot: usize) -> Option<LatLng> {
        let next = slot + 1;
        if next < tour.len() {
            self.at(tour, next)
        } else if self.closes {
            self.start
        } else {
            None
        }
    }
}

fn edge_km(from: Option<LatLng>, to: LatLng) -> f64 {
    from.map_or(0.0, |anchor| haversine_km(anchor, to))
}
