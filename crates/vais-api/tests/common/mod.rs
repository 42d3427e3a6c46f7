//! Shared fixtures: a built single-page app on disk.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tempfile::TempDir;
use tower::ServiceExt;
use vais_api::{Server, ServerConfig};

pub const INDEX_HTML: &str = "<!doctype html><div id=\"root\"></div>";
pub const APP_JS: &str = "console.log('vais');";

/// A temporary `dist/spa` with an index and one asset.
pub struct SpaDir {
    pub dir: TempDir,
}

impl SpaDir {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();
        std::fs::write(dir.path().join("assets").join("app.js"), APP_JS).unwrap();
        Self { dir }
    }

    pub fn config(&self) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            static_dir: self.dir.path().to_path_buf(),
            ..ServerConfig::default()
        }
    }

    pub fn router(&self) -> Router {
        Server::new(self.config()).router()
    }
}

/// GET `path` and return status and body text.
pub async fn get(router: Router, path: &str) -> (StatusCode, String) {
    let req = Request::builder().uri(path).body(Body::empty()).unwrap();
    let resp = router.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
