//! HTTP server: API routes in front of the static single-page app.

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::Result;
use crate::routes::{AppState, api_router};

/// The VAIS HTTP server.
#[derive(Debug, Clone)]
pub struct Server {
    config: ServerConfig,
}

impl Server {
    /// Server for `config`.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Full application router.
    ///
    /// Paths not matched by the API are served from `static_dir`; paths with
    /// no file there get `index.html` so client-side routes resolve.
    pub fn router(&self) -> Router {
        let static_files = ServeDir::new(&self.config.static_dir)
            .fallback(ServeFile::new(self.config.index_file()));

        api_router(AppState::new(self.config.ping_message.as_str()))
            .fallback_service(static_files)
            .layer(TraceLayer::new_for_http())
    }

    /// Serve until Ctrl-C.
    pub async fn run(self) -> Result<()> {
        self.run_until(shutdown_signal()).await
    }

    /// Serve until `shutdown` completes, then drain in-flight requests.
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.config.bind_address()).await?;
        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        if !self.config.index_file().is_file() {
            tracing::warn!(
                static_dir = %self.config.static_dir.display(),
                "index.html not found; non-API paths will return 404"
            );
        }
        tracing::info!(%addr, static_dir = %self.config.static_dir.display(), "listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
