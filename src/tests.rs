#[cfg(test)]
mod integration_tests {
    use crate::test_utils::test_utils::{setup_test_app, DEMO_PLAN_UUID, DEMO_UPRN};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use common::{BeforeAfterEnergyUsage, ErrorResponse, HealthResponse, Home};

    #[tokio::test]
    async fn test_health_check() {
        let (_data_dir, app) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.data_store, "available");
    }

    #[tokio::test]
    async fn test_get_before_after_energy_usage() {
        let (_data_dir, app) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .get(&format!("/api/before_after_energy_usage/{DEMO_PLAN_UUID}"))
            .await;

        response.assert_status(StatusCode::OK);
        let body: BeforeAfterEnergyUsage = response.json();
        assert_eq!(body.baseline.len(), 12);
        assert_eq!(body.improved.len(), 12);
        assert_eq!(body.baseline[&1].energy, 320.0);
        assert_eq!(body.improved[&1].energy, 210.0);
    }

    #[tokio::test]
    async fn test_comparison_wire_format_is_the_bare_object() {
        let (_data_dir, app) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .get(&format!("/api/before_after_energy_usage/{DEMO_PLAN_UUID}"))
            .await;

        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();

        // The body is the comparison object itself, with string month keys.
        assert!(body.get("baseline").is_some());
        assert!(body.get("improved").is_some());
        assert!(body.get("data").is_none());
        assert_eq!(body["baseline"]["1"]["energy"], 320.0);
    }

    #[tokio::test]
    async fn test_unknown_plan_returns_not_found() {
        let (_data_dir, app) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/api/before_after_energy_usage/00000000-0000-0000-0000-000000000000")
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: ErrorResponse = response.json();
        assert!(!body.success);
        assert_eq!(body.code, "not_found");
    }

    #[tokio::test]
    async fn test_non_uuid_plan_id_is_rejected() {
        let (_data_dir, app) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/before_after_energy_usage/not-a-uuid").await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_record_returns_server_error() {
        let (data_dir, app) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let uuid = "7d9f1a00-0000-4000-8000-000000000001";
        std::fs::write(data_dir.path().join(format!("{uuid}.json")), "{broken").unwrap();

        let response = server.get(&format!("/api/before_after_energy_usage/{uuid}")).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "invalid_record");
    }

    #[tokio::test]
    async fn test_comparison_is_cached_after_first_fetch() {
        let (data_dir, app) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let url = format!("/api/before_after_energy_usage/{DEMO_PLAN_UUID}");
        server.get(&url).await.assert_status(StatusCode::OK);

        // Remove the backing file; the second fetch must be served from cache.
        std::fs::remove_file(data_dir.path().join(format!("{DEMO_PLAN_UUID}.json"))).unwrap();

        let response = server.get(&url).await;
        response.assert_status(StatusCode::OK);
        let body: BeforeAfterEnergyUsage = response.json();
        assert_eq!(body.baseline.len(), 12);
    }

    #[tokio::test]
    async fn test_get_home() {
        let (_data_dir, app) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get(&format!("/api/homes/{DEMO_UPRN}")).await;

        response.assert_status(StatusCode::OK);
        let body: Home = response.json();
        assert_eq!(body.uprn, DEMO_UPRN);
        assert_eq!(body.epc_rating.as_deref(), Some("D"));
    }

    #[tokio::test]
    async fn test_unknown_home_returns_not_found() {
        let (_data_dir, app) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/homes/111111111").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "not_found");
    }
}
