use common::{BeforeAfterEnergyUsage, ErrorResponse, HealthResponse, Home, MonthlyEnergyUsage};
use moka::future::Cache;
use utoipa::OpenApi;

use crate::store::ResultsStore;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// File-backed record store
    pub store: ResultsStore,
    /// Cache of parsed records
    pub cache: Cache<String, CachedData>,
}

/// Cached data types
#[derive(Clone, Debug)]
pub enum CachedData {
    EnergyUsage(BeforeAfterEnergyUsage),
    Home(Home),
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::energy::get_before_after_energy_usage,
        crate::handlers::homes::get_home,
    ),
    components(
        schemas(
            BeforeAfterEnergyUsage,
            MonthlyEnergyUsage,
            Home,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "energy", description = "Before/after energy usage endpoints"),
        (name = "homes", description = "Home lookup endpoints"),
    ),
    info(
        title = "Retroplan API",
        description = "Retrofit planner API - serves before/after energy usage comparisons for home retrofit plans",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
