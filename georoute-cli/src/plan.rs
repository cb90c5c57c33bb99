//! The `optimize` and `lodging` commands.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Args;
use georoute_core::{
    CentroidCalculator, GeometricCentroid, LodgingRequest, OptimizeRequest, RouteSequencer,
};
use georoute_solver_tsp::TourSequencer;

use crate::CliError;
use crate::request::{load_request, write_json};

/// CLI arguments for the `optimize` subcommand.
#[derive(Debug, Clone, Args)]
#[command(
    long_about = "Order the points of interest in a JSON OptimizeRequest. \
                  The resulting route is printed to stdout as JSON.",
    about = "Sequence a trip's stops"
)]
pub(crate) struct OptimizeArgs {
    /// Path to a JSON file containing an OptimizeRequest.
    #[arg(value_name = "path")]
    pub(crate) request_path: Utf8PathBuf,
}

/// CLI arguments for the `lodging` subcommand.
#[derive(Debug, Clone, Args)]
#[command(
    long_about = "Compute the centroid of the points in a JSON lodging request \
                  ({points, bufferRadiusKm}) and print the lodging zone, with \
                  booking search links, to stdout as JSON.",
    about = "Suggest where to stay"
)]
pub(crate) struct LodgingArgs {
    /// Path to a JSON file containing a lodging request.
    #[arg(value_name = "path")]
    pub(crate) request_path: Utf8PathBuf,
}

pub(crate) fn run_optimize(args: &OptimizeArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_optimize_with(args, &TourSequencer::new(), &mut stdout)
}

pub(crate) fn run_optimize_with(
    args: &OptimizeArgs,
    sequencer: &dyn RouteSequencer,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let request: OptimizeRequest = load_request(&args.request_path)?;
    let route = sequencer
        .optimize(&request)
        .map_err(|source| CliError::Sequence {
            path: args.request_path.clone(),
            source,
        })?;
    log::info!(
        "sequenced {} of {} points",
        route.len(),
        request.points.len()
    );
    write_json(writer, &route)
}

pub(crate) fn run_lodging(args: &LodgingArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_lodging_with(args, &GeometricCentroid, &mut stdout)
}

pub(crate) fn run_lodging_with(
    args: &LodgingArgs,
    calculator: &dyn CentroidCalculator,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let request: LodgingRequest = load_request(&args.request_path)?;
    let zone = calculator
        .calculate(&request.points, request.buffer_radius_km)
        .map_err(|source| CliError::Lodging {
            path: args.request_path.clone(),
            source,
        })?;
    write_json(writer, &zone)
}
