//! Integration test modules

mod live_server;
mod static_files;
