use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use moka::future::Cache;

use crate::schemas::AppState;
use crate::store::ResultsStore;

/// Initialize application configuration and state
pub async fn initialize_app_state(data_dir: &Path) -> Result<AppState> {
    let store = ResultsStore::new(data_dir);

    if !store.is_available().await {
        tracing::warn!(
            "Data directory {} is not readable; all lookups will fail until it exists",
            data_dir.display()
        );
    }

    // Initialize cache
    let cache = Cache::builder()
        .max_capacity(1000)
        .time_to_live(Duration::from_secs(300)) // 5 minutes
        .build();

    Ok(AppState { store, cache })
}
