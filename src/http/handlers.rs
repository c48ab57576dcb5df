//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Query, State},
    Json,
};

use super::dto::{HealthResponse, PlayerListResponse, PlotQuery};
use super::error::AppError;
use super::state::AppState;
use crate::api::{AboutInfo, PlotSpec};
use crate::services;
use crate::services::smoothing::DEFAULT_SPAN;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running and its dataset
/// is in memory.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        records: state.dataset.len(),
    }))
}

/// GET /v1/players
///
/// List the selectable players in dropdown order.
pub async fn list_players(State(state): State<AppState>) -> HandlerResult<PlayerListResponse> {
    let players = state.dropdown.options().to_vec();
    let total = players.len();

    Ok(Json(PlayerListResponse { players, total }))
}

/// GET /v1/plot
///
/// Build the plot specification for the selected players.
pub async fn get_plot(
    State(state): State<AppState>,
    Query(query): Query<PlotQuery>,
) -> HandlerResult<PlotSpec> {
    let span = query.span.unwrap_or(DEFAULT_SPAN);
    if !(span > 0.0 && span <= 1.0) {
        return Err(AppError::BadRequest(format!(
            "span must be in (0, 1], got {}",
            span
        )));
    }

    let slots = query.slots();
    let dataset = state.dataset.clone();

    // Series construction and smoothing are CPU-bound; keep them off the
    // async worker threads.
    let spec = tokio::task::spawn_blocking(move || {
        services::build_plot_spec(&dataset, &slots, span)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    Ok(Json(spec))
}

/// GET /v1/about
///
/// Derived strings for the about page template.
pub async fn get_about(State(state): State<AppState>) -> HandlerResult<AboutInfo> {
    Ok(Json(services::derive_about_info(
        &state.dataset,
        &state.dropdown,
    )))
}
