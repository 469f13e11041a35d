use axum::{extract::State, http::StatusCode, response::Json};
use common::HealthResponse;
use tracing::instrument;

use crate::schemas::AppState;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 500, description = "Service is unhealthy", body = common::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, StatusCode> {
    // Test data store availability
    let store_status = if state.store.is_available().await {
        "available".to_string()
    } else {
        "unavailable".to_string()
    };

    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data_store: store_status,
    };

    Ok(Json(response))
}
