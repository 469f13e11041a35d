use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use common::{BeforeAfterEnergyUsage, ErrorResponse};
use tracing::instrument;
use uuid::Uuid;

use crate::handlers::store_error_response;
use crate::schemas::{AppState, CachedData};

/// Get the before/after energy usage comparison for a retrofit plan.
///
/// The body is the bare comparison object (no envelope); the frontend chart
/// consumes it directly.
#[utoipa::path(
    get,
    path = "/api/before_after_energy_usage/{uuid}",
    tag = "energy",
    params(
        ("uuid" = Uuid, Path, description = "Retrofit plan UUID"),
    ),
    responses(
        (status = 200, description = "Comparison retrieved successfully", body = BeforeAfterEnergyUsage),
        (status = 404, description = "Plan not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_before_after_energy_usage(
    Path(uuid): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<BeforeAfterEnergyUsage>, (StatusCode, Json<ErrorResponse>)> {
    let cache_key = format!("energy_{uuid}");

    // Check cache first
    if let Some(CachedData::EnergyUsage(usage)) = state.cache.get(&cache_key).await {
        return Ok(Json(usage));
    }

    let usage = state
        .store
        .before_after_energy_usage(&uuid)
        .await
        .map_err(store_error_response)?;

    // Cache the result
    state
        .cache
        .insert(cache_key, CachedData::EnergyUsage(usage.clone()))
        .await;

    Ok(Json(usage))
}
