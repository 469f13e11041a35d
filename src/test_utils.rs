#[cfg(test)]
pub mod test_utils {
    use crate::config::initialize_app_state;
    use crate::router::create_router;
    use axum::Router;
    use tempfile::TempDir;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Plan UUID seeded into every test data directory.
    pub const DEMO_PLAN_UUID: &str = "1e0e7511-9e40-4b13-8c52-4f9c26c41c55";

    /// Home UPRN seeded into every test data directory.
    pub const DEMO_UPRN: &str = "906205784";

    /// Create a data directory populated with the demo plan and home records
    pub fn setup_test_data_dir() -> TempDir {
        let dir = tempfile::tempdir().expect("Failed to create test data directory");

        let comparison = serde_json::json!({
            "baseline": {
                "1": {"energy": 320.0}, "2": {"energy": 300.0}, "3": {"energy": 260.0},
                "4": {"energy": 200.0}, "5": {"energy": 150.0}, "6": {"energy": 120.0},
                "7": {"energy": 110.0}, "8": {"energy": 115.0}, "9": {"energy": 160.0},
                "10": {"energy": 220.0}, "11": {"energy": 280.0}, "12": {"energy": 310.0}
            },
            "improved": {
                "1": {"energy": 210.0}, "2": {"energy": 195.0}, "3": {"energy": 170.0},
                "4": {"energy": 130.0}, "5": {"energy": 100.0}, "6": {"energy": 85.0},
                "7": {"energy": 80.0}, "8": {"energy": 82.0}, "9": {"energy": 105.0},
                "10": {"energy": 145.0}, "11": {"energy": 185.0}, "12": {"energy": 205.0}
            }
        });
        std::fs::write(
            dir.path().join(format!("{DEMO_PLAN_UUID}.json")),
            serde_json::to_string_pretty(&comparison).unwrap(),
        )
        .expect("Failed to write demo plan record");

        let home = serde_json::json!({
            "uprn": DEMO_UPRN,
            "address": "1 Example Street, Exampleton",
            "epc_rating": "D"
        });
        std::fs::write(
            dir.path().join(format!("{DEMO_UPRN}.json")),
            serde_json::to_string_pretty(&home).unwrap(),
        )
        .expect("Failed to write demo home record");

        dir
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr) // Output to stderr, which is captured by tests
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create the axum app for testing. The returned TempDir must be kept
    /// alive for as long as the app is used.
    pub async fn setup_test_app() -> (TempDir, Router) {
        let _ = init_test_tracing();

        let data_dir = setup_test_data_dir();
        let state = initialize_app_state(data_dir.path())
            .await
            .expect("Failed to initialize test app state");
        let router = create_router(state);
        (data_dir, router)
    }
}
