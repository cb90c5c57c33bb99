//! Serve command implementation for the GeoRoute CLI.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use georoute_api::{ApiConfig, AppState};
use georoute_core::GeometricCentroid;
use georoute_export::{ExportSettings, PdfItineraryRenderer};
use georoute_solver_tsp::TourSequencer;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::export::settings_from;
use crate::{
    ARG_BIND, ARG_CORS_ORIGIN, ARG_MAX_BODY_BYTES, ARG_OPTIMIZE_TIMEOUT_MS, ARG_PAGE_SIZE,
    ARG_TITLE, CliError,
};

/// CLI arguments for the `serve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Serve the trip planning HTTP API: /route/optimize, \
                  /lodging/calculate and /export/pdf. Options can come from \
                  CLI flags, configuration files, or environment variables.",
    about = "Run the HTTP API"
)]
#[ortho_config(prefix = "GEOROUTE")]
pub(crate) struct ServeArgs {
    /// Socket address to listen on (default 127.0.0.1:8080).
    #[arg(long = ARG_BIND, value_name = "addr")]
    #[serde(default)]
    pub(crate) bind: Option<String>,
    /// Browser origin allowed by CORS; repeat for several.
    #[arg(long = ARG_CORS_ORIGIN, value_name = "origin")]
    #[serde(default)]
    pub(crate) cors_origin: Option<Vec<String>>,
    /// Deadline for each optimisation request in milliseconds.
    #[arg(long = ARG_OPTIMIZE_TIMEOUT_MS, value_name = "ms")]
    #[serde(default)]
    pub(crate) optimize_timeout_ms: Option<u64>,
    /// Largest accepted request body in bytes.
    #[arg(long = ARG_MAX_BODY_BYTES, value_name = "bytes")]
    #[serde(default)]
    pub(crate) max_body_bytes: Option<usize>,
    /// Heading printed on exported documents.
    #[arg(long = ARG_TITLE, value_name = "text")]
    #[serde(default)]
    pub(crate) title: Option<String>,
    /// Paper size for exported documents: `a4` or `letter`.
    #[arg(long = ARG_PAGE_SIZE, value_name = "size")]
    #[serde(default)]
    pub(crate) page_size: Option<String>,
}

impl ServeArgs {
    pub(crate) fn into_config(self) -> Result<ServeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ServeConfig::try_from(merged)
    }
}

/// Resolved `serve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ServeConfig {
    /// Server settings.
    pub(crate) api: ApiConfig,
    /// Process-wide export settings.
    pub(crate) settings: ExportSettings,
}

impl TryFrom<ServeArgs> for ServeConfig {
    type Error = CliError;

    fn try_from(args: ServeArgs) -> Result<Self, Self::Error> {
        let defaults = ApiConfig::default();
        let bind = match args.bind {
            Some(value) => parse_bind(value)?,
            None => defaults.bind,
        };
        let optimize_timeout = match args.optimize_timeout_ms {
            Some(0) => {
                return Err(CliError::InvalidArgument {
                    field: ARG_OPTIMIZE_TIMEOUT_MS,
                    value: "0".to_owned(),
                    reason: "the deadline must be positive".to_owned(),
                });
            }
            Some(ms) => Duration::from_millis(ms),
            None => defaults.optimize_timeout,
        };
        let cors_origins = match args.cors_origin {
            Some(origins) if !origins.is_empty() => origins,
            _ => defaults.cors_origins,
        };
        let settings = settings_from(args.title, args.page_size.as_deref())?;
        Ok(Self {
            api: ApiConfig {
                bind,
                cors_origins,
                optimize_timeout,
                max_body_bytes: args.max_body_bytes.unwrap_or(defaults.max_body_bytes),
            },
            settings,
        })
    }
}

fn parse_bind(value: String) -> Result<SocketAddr, CliError> {
    value
        .parse()
        .map_err(|err: std::net::AddrParseError| CliError::InvalidArgument {
            field: ARG_BIND,
            reason: err.to_string(),
            value,
        })
}

pub(crate) fn run_serve(args: ServeArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    georoute_export::init(config.settings)?;
    let state = AppState::new(
        TourSequencer::new(),
        GeometricCentroid,
        PdfItineraryRenderer::new(),
    );
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    runtime.block_on(georoute_api::serve(state, config.api))?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ServeConfig, CliError> {
    let merged = ServeArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ServeConfig::try_from(merged)
}
