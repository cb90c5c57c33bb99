//! Shared test harness modules for the GeoRoute CLI.
#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

use super::*;

mod helpers;
mod parse_unit;
mod serve_unit;
