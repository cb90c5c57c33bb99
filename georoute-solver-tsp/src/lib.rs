//! Heuristic tour sequencing for GeoRoute.
//!
//! This crate provides [`TourSequencer`], the default implementation of the
//! [`RouteSequencer`](georoute_core::RouteSequencer) trait. It treats the
//! request as a small travelling-salesman instance over great-circle
//! distances: a nearest-neighbour pass builds an initial tour and a 2-opt
//! local search then removes crossing edges until no reversal shortens the
//! tour by more than a fixed threshold.
//!
//! Loop and one-way routes differ only in the cost model: a loop with a start
//! location pays for the edge from the last stop back to the start, a one-way
//! route does not. The start location anchors the first edge but never
//! appears in the returned sequence.
//!
//! Manual orderings and the input-order fallback bypass both heuristics.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod construction;
mod improvement;
mod sequencer;

pub use sequencer::{TourSequencer, TourSequencerConfig};
