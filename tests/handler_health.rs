mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use portfolio::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_success() {
    let fixtures = tempfile::tempdir().unwrap();
    let resume = fixtures.path().join("resume.pdf");
    std::fs::write(&resume, b"%PDF-1.4 placeholder").unwrap();

    let state = common::create_test_state(fixtures.path().to_path_buf(), resume);
    let app = Router::new()
        .route("/api/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["content"]["status"], "ok");
    assert_eq!(json["checks"]["renderer"]["status"], "ok");
    assert_eq!(json["checks"]["resume_asset"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let fixtures = tempfile::tempdir().unwrap();
    let resume = fixtures.path().join("resume.pdf");
    std::fs::write(&resume, b"%PDF-1.4 placeholder").unwrap();

    let state = common::create_test_state(fixtures.path().to_path_buf(), resume);
    let app = Router::new()
        .route("/api/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("content").is_some());
    assert!(json["checks"].get("renderer").is_some());
    assert!(json["checks"].get("resume_asset").is_some());
}

#[tokio::test]
async fn test_health_degraded_when_resume_missing() {
    let fixtures = tempfile::tempdir().unwrap();
    let missing = fixtures.path().join("resume.pdf");

    let state = common::create_test_state(fixtures.path().to_path_buf(), missing);
    let app = Router::new()
        .route("/api/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/health").await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["content"]["status"], "ok");
    assert_eq!(json["checks"]["renderer"]["status"], "ok");
    assert_eq!(json["checks"]["resume_asset"]["status"], "error");
}
