mod common;

use axum::Router;
use axum_test::TestServer;
use portfolio::api;
use portfolio::content;

fn api_server() -> TestServer {
    let state = common::default_state();
    let app = Router::new()
        .nest("/api", api::routes::public_routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_profile_projection() {
    let server = api_server();

    let response = server.get("/api/profile").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["name"], "Dhairya Joshi");
    assert_eq!(json["email"], "joshidhairaya2002@gmail.com");
    assert_eq!(json["resume_href"], "/resume.pdf");
    assert_eq!(json["projects"].as_array().unwrap().len(), 8);
    assert_eq!(json["education"].as_array().unwrap().len(), 3);
    assert_eq!(json["links"].as_array().unwrap().len(), 4);
    assert_eq!(
        json["experience"]["role"],
        "Software Engineer — Solytics Partners"
    );
}

#[tokio::test]
async fn test_projects_projection_preserves_order() {
    let server = api_server();
    let profile = content::profile();

    let response = server.get("/api/projects").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let projects = json.as_array().unwrap();
    assert_eq!(projects.len(), profile.projects.len());

    for (rendered, authored) in projects.iter().zip(&profile.projects) {
        assert_eq!(rendered["title"], authored.title);
        assert_eq!(rendered["repo_url"], authored.repo_url);

        let tech: Vec<&str> = rendered["tech"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t.as_str().unwrap())
            .collect();
        assert_eq!(tech, authored.tech, "tag order changed for {}", authored.title);
    }
}

#[tokio::test]
async fn test_unknown_api_path_returns_json_error() {
    let server = api_server();

    let response = server.get("/api/no-such-endpoint").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    // Nested routers see the path with the `/api` prefix stripped.
    assert_eq!(json["error"]["details"]["path"], "/no-such-endpoint");
}

#[tokio::test]
async fn test_projects_projection_demo_links() {
    let server = api_server();

    let json = server.get("/api/projects").await.json::<serde_json::Value>();
    let projects = json.as_array().unwrap();

    // Demo links are present only where authored; absent keys are skipped,
    // not serialized as null.
    let chess = projects
        .iter()
        .find(|p| p["title"] == "Chess (Flutter)")
        .unwrap();
    assert_eq!(chess["demo_url"], "https://chess-dsfy.onrender.com/");

    let gomq = projects
        .iter()
        .find(|p| p["title"] == "GoMQ — Lightweight Message Queue")
        .unwrap();
    assert!(gomq.get("demo_url").is_none());
}
