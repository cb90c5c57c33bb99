//! Command-line interface for the GeoRoute trip planner.
//!
//! The `georoute` binary exposes the engines offline (`optimize`, `lodging`,
//! `export`) and runs the HTTP API (`serve`). Request files use the same JSON
//! shapes as the HTTP endpoints.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use log::LevelFilter;

mod error;
mod export;
mod logging;
mod plan;
mod request;
mod serve;

pub use error::CliError;

use crate::export::ExportArgs;
use crate::plan::{LodgingArgs, OptimizeArgs};
use crate::serve::ServeArgs;

pub(crate) const ARG_REQUEST: &str = "request";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ARG_TITLE: &str = "title";
pub(crate) const ARG_PAGE_SIZE: &str = "page-size";
pub(crate) const ARG_BIND: &str = "bind";
pub(crate) const ARG_CORS_ORIGIN: &str = "cors-origin";
pub(crate) const ARG_OPTIMIZE_TIMEOUT_MS: &str = "optimize-timeout-ms";
pub(crate) const ARG_MAX_BODY_BYTES: &str = "max-body-bytes";
pub(crate) const ENV_EXPORT_REQUEST: &str = "GEOROUTE_CMDS_EXPORT_REQUEST_PATH";
pub(crate) const ENV_LOG_LEVEL: &str = "GEOROUTE_LOG_LEVEL";

/// Run the GeoRoute CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments are invalid or the selected command
/// fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    logging::init_logger(cli.log_level)?;
    match cli.command {
        Command::Optimize(args) => plan::run_optimize(&args),
        Command::Lodging(args) => plan::run_lodging(&args),
        Command::Export(args) => export::run_export(args),
        Command::Serve(args) => serve::run_serve(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "georoute",
    about = "Plan day trips: sequence stops, suggest lodging, print itineraries",
    version
)]
struct Cli {
    /// Log verbosity: off, error, warn, info, debug or trace.
    #[arg(
        long = "log-level",
        env = ENV_LOG_LEVEL,
        default_value_t = LevelFilter::Info,
        global = true,
        value_name = "level"
    )]
    log_level: LevelFilter,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Order the points of interest in a request file.
    Optimize(OptimizeArgs),
    /// Propose a lodging zone for the points in a request file.
    Lodging(LodgingArgs),
    /// Render an itinerary request to a PDF file.
    Export(ExportArgs),
    /// Serve the HTTP API.
    Serve(ServeArgs),
}

#[cfg(test)]
mod tests;
