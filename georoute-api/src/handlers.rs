//! Endpoint handlers.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use georoute_core::{
    ExportRequest, ItineraryRequest, LodgingRequest, LodgingZone, OptimizeRequest, OptimizedRoute,
    SequenceError, SequencePlan,
};

use crate::error::ApiError;
use crate::state::AppState;

const PDF_DISPOSITION: &str = "attachment; filename=\"itinerary.pdf\"";

/// `POST /route/optimize`
pub(crate) async fn optimize(
    State(state): State<Arc<AppState>>,
    Json(request): Json<OptimizeRequest>,
) -> Result<Json<OptimizedRoute>, ApiError> {
    // Over HTTP a manual request must name its order explicitly.
    if request.validate()? == SequencePlan::InputOrder {
        return Err(SequenceError::MissingManualSequence.into());
    }

    let deadline = state.optimize_timeout;
    let points = request.points.len();
    let sequencer = Arc::clone(&state.sequencer);
    let task = tokio::task::spawn_blocking(move || sequencer.optimize(&request));
    let route = tokio::time::timeout(deadline, task)
        .await
        .map_err(|_| ApiError::Timeout(deadline))?
        .map_err(|err| ApiError::Internal(format!("sequencing task failed: {err}")))??;

    log::debug!("sequenced {points} points as {}", route.route_mode);
    Ok(Json(route))
}

/// `POST /lodging/calculate`
pub(crate) async fn lodging(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LodgingRequest>,
) -> Result<Json<LodgingZone>, ApiError> {
    let zone = state
        .calculator
        .calculate(&request.points, request.buffer_radius_km)?;
    Ok(Json(zone))
}

/// `POST /export/pdf`
pub(crate) async fn export_pdf(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ExportRequest>,
) -> Result<Response, ApiError> {
    let itinerary = ItineraryRequest::try_from(request)?;
    let renderer = Arc::clone(&state.renderer);
    let bytes = tokio::task::spawn_blocking(move || renderer.render(&itinerary))
        .await
        .map_err(|err| ApiError::Internal(format!("rendering task failed: {err}")))??;

    log::debug!("rendered itinerary of {} bytes", bytes.len());
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (header::CONTENT_DISPOSITION, PDF_DISPOSITION),
        ],
        bytes,
    )
        .into_response())
}
