//! VAIS API: HTTP server for the single-page app.
//!
//! Serves the built front end from a directory and answers a handful of JSON
//! endpoints:
//!
//! | Route            | Reply                                          |
//! |------------------|------------------------------------------------|
//! | `GET /api/ping`  | `{"message": <ping_message>}`                  |
//! | `GET /api/demo`  | `{"message": "Hello from the VAIS server"}`    |
//! | `GET /health`    | `{"status": "ok", "version": <crate version>}` |
//! | other `/api/*`   | `404 {"error": ...}`                           |
//! | anything else    | static file, or `index.html`                   |
//!
//! # Modules
//!
//! - [`config`]: Layered server settings
//! - [`error`]: Error types and Result alias
//! - [`routes`]: JSON handlers
//! - [`server`]: Router assembly and the serve loop

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

pub use config::ServerConfig;
pub use error::{Error, Result};
pub use routes::{AppState, DEMO_MESSAGE, ErrorResponse, HealthResponse, MessageResponse};
pub use server::Server;
