//! Export command implementation for the GeoRoute CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use georoute_core::{ExportRequest, ItineraryRenderer, ItineraryRequest};
use georoute_export::{ExportSettings, PageSize, PdfItineraryRenderer};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::request::{load_request, require_existing};
use crate::{ARG_OUTPUT, ARG_PAGE_SIZE, ARG_REQUEST, ARG_TITLE, CliError, ENV_EXPORT_REQUEST};

/// File written when `--output` is not given.
pub(crate) const DEFAULT_OUTPUT: &str = "itinerary.pdf";

/// CLI arguments for the `export` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Render a JSON export request ({route, points, startLocation, \
                  metrics, mapImageBase64}) to a printable PDF itinerary. \
                  Options can come from CLI flags, configuration files, or \
                  environment variables.",
    about = "Render an itinerary PDF"
)]
#[ortho_config(prefix = "GEOROUTE")]
pub(crate) struct ExportArgs {
    /// Path to a JSON file containing an export request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Where to write the PDF (default `itinerary.pdf`).
    #[arg(long = ARG_OUTPUT, short = 'o', value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Heading printed on the document.
    #[arg(long = ARG_TITLE, value_name = "text")]
    #[serde(default)]
    pub(crate) title: Option<String>,
    /// Paper size: `a4` or `letter`.
    #[arg(long = ARG_PAGE_SIZE, value_name = "size")]
    #[serde(default)]
    pub(crate) page_size: Option<String>,
}

impl ExportArgs {
    pub(crate) fn into_config(self) -> Result<ExportConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ExportConfig::try_from(merged)
    }
}

/// Resolved `export` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExportConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Destination of the rendered document.
    pub(crate) output: Utf8PathBuf,
    /// Document settings for the renderer.
    pub(crate) settings: ExportSettings,
}

impl ExportConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_REQUEST)
    }
}

impl TryFrom<ExportArgs> for ExportConfig {
    type Error = CliError;

    fn try_from(args: ExportArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_EXPORT_REQUEST,
        })?;
        let output = args
            .output
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_OUTPUT));
        let settings = settings_from(args.title, args.page_size.as_deref())?;
        Ok(Self {
            request_path,
            output,
            settings,
        })
    }
}

/// Build renderer settings from optional title and page size overrides.
pub(crate) fn settings_from(
    title: Option<String>,
    page_size: Option<&str>,
) -> Result<ExportSettings, CliError> {
    let defaults = ExportSettings::default();
    let size = match page_size {
        Some(name) => name
            .parse::<PageSize>()
            .map_err(|err| CliError::InvalidArgument {
                field: ARG_PAGE_SIZE,
                value: name.to_owned(),
                reason: err.to_string(),
            })?,
        None => defaults.page_size,
    };
    Ok(ExportSettings {
        title: title.unwrap_or(defaults.title),
        page_size: size,
        ..defaults
    })
}

pub(crate) fn run_export(args: ExportArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let renderer = PdfItineraryRenderer::with_settings(config.settings.clone());
    let written = run_export_with(&config, &renderer)?;
    log::info!("wrote {written} bytes to {}", config.output);
    Ok(())
}

/// Render the configured request and write it out, returning the byte count.
pub(crate) fn run_export_with(
    config: &ExportConfig,
    renderer: &dyn ItineraryRenderer,
) -> Result<usize, CliError> {
    let itinerary = load_itinerary(&config.request_path)?;
    let document = renderer.render(&itinerary).map_err(CliError::Render)?;
    georoute_fs::write_file(&config.output, &document).map_err(|source| {
        CliError::WriteDocument {
            path: config.output.clone(),
            source,
        }
    })?;
    Ok(document.len())
}

fn load_itinerary(path: &Utf8Path) -> Result<ItineraryRequest, CliError> {
    let request: ExportRequest = load_request(path)?;
    ItineraryRequest::try_from(request).map_err(|source| CliError::InvalidExportRequest {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ExportConfig, CliError> {
    let merged = ExportArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ExportConfig::try_from(merged)
}
