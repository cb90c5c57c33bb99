//! Error types emitted by the GeoRoute CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use georoute_api::ServeError;
use georoute_core::{ExportRequestError, LodgingError, RenderError, SequenceError};
use georoute_export::ExportInitError;
use thiserror::Error;

/// Errors emitted by the GeoRoute CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (pass it on the command line or set {env})")]
    MissingArgument {
        /// Name of the missing argument.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// An option was present but its value is unusable.
    #[error("invalid --{field} value {value:?}: {reason}")]
    InvalidArgument {
        /// Name of the offending option.
        field: &'static str,
        /// The rejected value.
        value: String,
        /// What is wrong with it.
        reason: String,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Name of the argument carrying the path.
        field: &'static str,
        /// The missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Name of the argument carrying the path.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Name of the argument carrying the path.
        field: &'static str,
        /// The path being inspected.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Installing the logger failed.
    #[error("failed to initialise logging: {0}")]
    Logging(#[source] std::io::Error),
    /// Opening a request file failed.
    #[error("failed to open request at {path:?}: {source}")]
    OpenRequest {
        /// Path of the request file.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Request JSON could not be decoded.
    #[error("failed to parse request JSON at {path:?}: {source}")]
    ParseRequest {
        /// Path of the request file.
        path: Utf8PathBuf,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// The sequencer rejected the request.
    #[error("cannot sequence request in {path:?}: {source}")]
    Sequence {
        /// Path of the request file.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: SequenceError,
    },
    /// The lodging calculator rejected the request.
    #[error("cannot compute lodging zone for {path:?}: {source}")]
    Lodging {
        /// Path of the request file.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: LodgingError,
    },
    /// The export request failed boundary validation.
    #[error("export request in {path:?} is invalid: {source}")]
    InvalidExportRequest {
        /// Path of the request file.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: ExportRequestError,
    },
    /// The itinerary renderer failed.
    #[error("failed to render itinerary: {0}")]
    Render(#[source] RenderError),
    /// Serialising a command result failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing a command result to stdout failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// Writing the rendered document failed.
    #[error("failed to write document to {path:?}: {source}")]
    WriteDocument {
        /// Destination path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Export settings were fixed before the server could set them.
    #[error(transparent)]
    ExportInit(#[from] ExportInitError),
    /// The async runtime could not be started.
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// The HTTP server failed to start or stopped with an error.
    #[error(transparent)]
    Serve(#[from] ServeError),
}
