//! Common transport-layer types shared between backend and frontend.
//! These structs mirror the backend handlers' request/response payloads
//! so the frontend can deserialize API responses without duplicating shapes.

mod energy;
mod home;

pub use energy::{month_labels, BeforeAfterEnergyUsage, ComparisonSeries, MonthlyEnergyUsage};
pub use home::Home;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by the backend for non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Data store availability
    pub data_store: String,
}
