use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use common::{ErrorResponse, Home};
use tracing::instrument;

use crate::handlers::store_error_response;
use crate::schemas::{AppState, CachedData};

/// Get a home record by UPRN.
#[utoipa::path(
    get,
    path = "/api/homes/{uprn}",
    tag = "homes",
    params(
        ("uprn" = String, Path, description = "Unique Property Reference Number"),
    ),
    responses(
        (status = 200, description = "Home retrieved successfully", body = Home),
        (status = 404, description = "Home not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_home(
    Path(uprn): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Home>, (StatusCode, Json<ErrorResponse>)> {
    let cache_key = format!("home_{uprn}");

    // Check cache first
    if let Some(CachedData::Home(home)) = state.cache.get(&cache_key).await {
        return Ok(Json(home));
    }

    let home = state.store.home(&uprn).await.map_err(store_error_response)?;

    // Cache the result
    state
        .cache
        .insert(cache_key, CachedData::Home(home.clone()))
        .await;

    Ok(Json(home))
}
