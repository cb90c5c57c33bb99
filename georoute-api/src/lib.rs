//! HTTP surface for the GeoRoute trip planner.
//!
//! Three JSON endpoints wrap the core engines:
//!
//! - `POST /route/optimize` sequences points of interest.
//! - `POST /lodging/calculate` proposes a lodging zone.
//! - `POST /export/pdf` renders a printable itinerary.
//!
//! Engines are injected through [`AppState`] as trait objects so the server
//! can be exercised with stubs. Sequencing and rendering run on the blocking
//! pool; sequencing is additionally bounded by a per-request deadline.

#![forbid(unsafe_code)]

mod config;
mod error;
mod handlers;
mod state;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, header};
use axum::routing::post;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub use config::{
    ApiConfig, DEFAULT_BIND, DEFAULT_CORS_ORIGINS, DEFAULT_MAX_BODY_BYTES,
    DEFAULT_OPTIMIZE_TIMEOUT,
};
pub use error::{ApiError, ServeError};
pub use state::AppState;

/// Build the endpoint router without CORS or body limits.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/route/optimize", post(handlers::optimize))
        .route("/lodging/calculate", post(handlers::lodging))
        .route("/export/pdf", post(handlers::export_pdf))
        .with_state(Arc::new(state))
}

/// Build the full application: routes, CORS allow-list and body limit.
///
/// The configured optimisation deadline replaces the one carried by `state`.
///
/// # Errors
/// Returns [`ServeError::InvalidOrigin`] when a configured origin is not a
/// valid header value.
pub fn app(state: AppState, config: &ApiConfig) -> Result<Router, ServeError> {
    let cors = cors_layer(&config.cors_origins)?;
    Ok(router(state.with_optimize_timeout(config.optimize_timeout))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(cors))
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer, ServeError> {
    let allowed = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ServeError::InvalidOrigin {
                origin: origin.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(allowed))
}

/// Bind to `config.bind` and serve until Ctrl-C.
///
/// # Errors
/// Returns [`ServeError`] when the configuration is invalid, the address
/// cannot be bound, or the server fails while running.
pub async fn serve(state: AppState, config: ApiConfig) -> Result<(), ServeError> {
    let application = app(state, &config)?;
    let listener = TcpListener::bind(config.bind)
        .await
        .map_err(|source| ServeError::Bind {
            addr: config.bind,
            source,
        })?;
    log::info!(
        "listening on {} (optimise deadline {:?})",
        config.bind,
        config.optimize_timeout
    );
    axum::serve(listener, application)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServeError::Serve)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("shutting down"),
        Err(err) => log::warn!("failed to listen for Ctrl-C: {err}"),
    }
}
