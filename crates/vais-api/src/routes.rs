//! JSON endpoints.
//!
//! Everything under `/api` is answered here; unknown `/api` paths get a JSON
//! 404 instead of the single-page app.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::routing::{any, get};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

/// Reply of `/api/demo`.
pub const DEMO_MESSAGE: &str = "Hello from the VAIS server";

/// Body of the message endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message text.
    pub message: String,
}

/// Body of `/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests.
    pub status: String,
    /// Server version.
    pub version: String,
}

/// Body of JSON error replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// What went wrong.
    pub error: String,
}

/// State shared by the handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    ping_message: Arc<str>,
}

impl AppState {
    /// State answering `/api/ping` with `ping_message`.
    pub fn new(ping_message: impl Into<Arc<str>>) -> Self {
        Self {
            ping_message: ping_message.into(),
        }
    }
}

/// Routes for `/health` and `/api/*`.
///
/// Everything under either prefix answers here, so unknown paths get a JSON
/// 404 instead of the app's `index.html`. An empty wildcard tail never
/// matches `{*rest}`, hence the explicit trailing-slash routes.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/health/", any(api_not_found))
        .route("/health/{*rest}", any(api_not_found))
        .route("/api/ping", get(ping))
        .route("/api/demo", get(demo))
        .route("/api", any(api_not_found))
        .route("/api/", any(api_not_found))
        .route("/api/{*rest}", any(api_not_found))
        .with_state(state)
}

async fn ping(State(state): State<AppState>) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: state.ping_message.to_string(),
    })
}

async fn demo() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: DEMO_MESSAGE.to_string(),
    })
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn api_not_found(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    tracing::debug!(path = %uri.path(), "unknown api route");
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("no API route for {}", uri.path()),
        }),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    async fn get_json(router: Router, path: &str) -> (StatusCode, serde_json::Value) {
        let req = Request::builder().uri(path).body(Body::empty()).unwrap();
        let resp = router.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_ping_uses_configured_message() {
        let (status, body) = get_json(api_router(AppState::new("pong")), "/api/ping").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"message": "pong"}));
    }

    #[tokio::test]
    async fn test_demo() {
        let (status, body) = get_json(api_router(AppState::new("ping")), "/api/demo").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], DEMO_MESSAGE);
    }

    #[tokio::test]
    async fn test_health_reports_version() {
        let (_, body) = get_json(api_router(AppState::new("ping")), "/health").await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_unknown_api_path_is_json_404() {
        let (status, body) =
            get_json(api_router(AppState::new("ping")), "/api/campaigns/42").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "no API route for /api/campaigns/42");
    }

    #[tokio::test]
    async fn test_reserved_prefixes_with_trailing_slash_are_json_404() {
        for path in ["/api/", "/health/", "/health/x"] {
            let (status, body) = get_json(api_router(AppState::new("ping")), path).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
            assert_eq!(body["error"], format!("no API route for {path}"));
        }
    }

    #[tokio::test]
    async fn test_ping_rejects_post() {
        let req = Request::builder()
            .method("POST")
            .uri("/api/ping")
            .body(Body::empty())
            .unwrap();
        let resp = api_router(AppState::new("ping")).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
