//! Routing between the API and the static app.

use axum::http::StatusCode;

use crate::common::{APP_JS, INDEX_HTML, SpaDir, get};

#[tokio::test]
async fn test_root_serves_index() {
    let spa = SpaDir::new();
    let (status, body) = get(spa.router(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX_HTML);
}

#[tokio::test]
async fn test_asset_served_from_disk() {
    let spa = SpaDir::new();
    let (status, body) = get(spa.router(), "/assets/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, APP_JS);
}

#[tokio::test]
async fn test_client_route_falls_back_to_index() {
    let spa = SpaDir::new();
    let (status, body) = get(spa.router(), "/dashboard/campaigns").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX_HTML);
}

#[tokio::test]
async fn test_unknown_api_path_never_falls_back() {
    let spa = SpaDir::new();
    let (status, body) = get(spa.router(), "/api/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("\"error\""));
    assert!(!body.contains("doctype"));
}

#[tokio::test]
async fn test_api_root_with_trailing_slash_is_404() {
    let spa = SpaDir::new();
    let (status, body) = get(spa.router(), "/api/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("\"error\""));
    assert_ne!(body, INDEX_HTML);
}

#[tokio::test]
async fn test_health_subpaths_never_fall_back() {
    let spa = SpaDir::new();
    for path in ["/health/", "/health/x", "/health/deep/path"] {
        let (status, body) = get(spa.router(), path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert!(!body.contains("doctype"), "{path}");
    }

    let (status, _) = get(spa.router(), "/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_api_routes_take_precedence() {
    let spa = SpaDir::new();
    let (status, body) = get(spa.router(), "/api/ping").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"message":"ping"}"#);

    let (_, body) = get(spa.router(), "/api/demo").await;
    assert_eq!(body, r#"{"message":"Hello from the VAIS server"}"#);
}

#[tokio::test]
async fn test_ping_message_from_config() {
    let spa = SpaDir::new();
    let mut config = spa.config();
    config.ping_message = "pong".into();
    let (_, body) = get(vais_api::Server::new(config).router(), "/api/ping").await;
    assert_eq!(body, r#"{"message":"pong"}"#);
}
