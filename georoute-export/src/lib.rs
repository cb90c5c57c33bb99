//! PDF itineraries for GeoRoute.
//!
//! This crate provides [`PdfItineraryRenderer`], the default implementation
//! of the [`ItineraryRenderer`](georoute_core::ItineraryRenderer) trait. It
//! lays out a header, an optional map snapshot, a trip summary and the
//! numbered stops, paginating onto as many A4 (or Letter) pages as needed,
//! and writes the document with `lopdf`.
//!
//! Document-wide settings are fixed once per process with [`init`]. Renderers
//! built with [`PdfItineraryRenderer::with_settings`] ignore them.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod layout;
mod renderer;
mod settings;
mod snapshot;
mod text;

pub use renderer::PdfItineraryRenderer;
pub use settings::{ExportInitError, ExportSettings, PageSize, PageSizeParseError, init};
