pub mod energy;
pub mod health;
pub mod homes;

use axum::{http::StatusCode, response::Json};
use common::ErrorResponse;

use crate::store::StoreError;

/// Map a store failure to the HTTP status and error body handlers return.
pub(crate) fn store_error_response(err: StoreError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, code) = match &err {
        StoreError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
        StoreError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "store_unavailable"),
        StoreError::Parse(_) => (StatusCode::INTERNAL_SERVER_ERROR, "invalid_record"),
    };

    if status.is_server_error() {
        tracing::error!("Store lookup failed: {}", err);
    }

    let body = ErrorResponse {
        error: err.to_string(),
        code: code.to_string(),
        success: false,
    };

    (status, Json(body))
}
