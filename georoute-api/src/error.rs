//! Error types for request handling and server start-up.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use georoute_core::{ExportRequestError, LodgingError, RenderError, SequenceError};
use thiserror::Error;

/// Failure of a single request, rendered as `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The caller sent an invalid request. Maps to 400.
    #[error("{0}")]
    BadRequest(String),
    /// Sequencing missed its deadline. Maps to 503.
    #[error("optimisation did not finish within {0:?}")]
    Timeout(Duration),
    /// The server failed while handling a valid request. Maps to 500.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Timeout(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SequenceError> for ApiError {
    fn from(error: SequenceError) -> Self {
        Self::BadRequest(error.to_string())
    }
}

impl From<LodgingError> for ApiError {
    fn from(error: LodgingError) -> Self {
        Self::BadRequest(error.to_string())
    }
}

impl From<ExportRequestError> for ApiError {
    fn from(error: ExportRequestError) -> Self {
        Self::BadRequest(error.to_string())
    }
}

impl From<RenderError> for ApiError {
    fn from(error: RenderError) -> Self {
        Self::Internal(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        if status.is_server_error() {
            log::error!("request failed with {status}: {message}");
        } else {
            log::debug!("request rejected with {status}: {message}");
        }
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Errors that stop the server from starting or keep it from running.
#[derive(Debug, Error)]
pub enum ServeError {
    /// A CORS origin could not be used as a header value.
    #[error("invalid CORS origin {origin:?}")]
    InvalidOrigin {
        /// The rejected origin.
        origin: String,
    },
    /// The listening socket could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address the server tried to bind.
        addr: SocketAddr,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The server stopped with an IO error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
