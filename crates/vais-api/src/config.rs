//! Server configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! environment variables. The CLI applies its own flags last.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default bind port.
pub const DEFAULT_PORT: u16 = 3000;
/// Default directory of the built single-page app.
pub const DEFAULT_STATIC_DIR: &str = "dist/spa";
/// Default `/api/ping` reply.
pub const DEFAULT_PING_MESSAGE: &str = "ping";

/// Environment variable overriding [`ServerConfig::port`].
pub const ENV_PORT: &str = "PORT";
/// Environment variable overriding [`ServerConfig::host`].
pub const ENV_HOST: &str = "HOST";
/// Environment variable overriding [`ServerConfig::ping_message`].
pub const ENV_PING_MESSAGE: &str = "PING_MESSAGE";
/// Environment variable overriding [`ServerConfig::static_dir`].
pub const ENV_STATIC_DIR: &str = "VAIS_STATIC_DIR";

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
    /// Directory served for non-API paths.
    pub static_dir: PathBuf,
    /// Message returned by `/api/ping`.
    pub ping_message: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            ping_message: DEFAULT_PING_MESSAGE.to_string(),
        }
    }
}

impl ServerConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("invalid server config: {e}")))
    }

    /// Load a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("failed to read {}: {e}", path.display())))?;
        let config = toml::from_str(&content)
            .map_err(|e| Error::config(format!("failed to parse {}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "loaded server config");
        Ok(config)
    }

    /// Defaults, overlaid with `path` when given, overlaid with the process
    /// environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.with_env()
    }

    /// Apply overrides from the process environment.
    pub fn with_env(self) -> Result<Self> {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, which maps variable names to values.
    ///
    /// Empty values are ignored. A `PORT` that is not a valid port number is
    /// an error.
    pub fn with_env_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(port) = get(ENV_PORT) {
            self.port = parse_port(&port)?;
        }
        if let Some(host) = get(ENV_HOST) {
            self.host = host.trim().to_string();
        }
        if let Some(message) = get(ENV_PING_MESSAGE) {
            self.ping_message = message;
        }
        if let Some(dir) = get(ENV_STATIC_DIR) {
            self.static_dir = PathBuf::from(dir);
        }
        Ok(self)
    }

    /// `host:port`, bracketing IPv6 literals.
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Path of the single-page app's entry document.
    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}

/// Parse a port number.
pub fn parse_port(value: &str) -> Result<u16> {
    value
        .trim()
        .parse::<u16>()
        .map_err(|_| Error::config(format!("invalid port '{value}'")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.static_dir, PathBuf::from("dist/spa"));
        assert_eq!(config.ping_message, "ping");
        assert_eq!(config.index_file(), PathBuf::from("dist/spa/index.html"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ServerConfig::from_toml_str("port = 8080\nping_message = \"pong\"").unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.ping_message, "pong");
        assert_eq!(config.host, DEFAULT_HOST);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = ServerConfig::from_toml_str("port = \"eighty\"").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        let err = ServerConfig::from_toml_str("colour = \"blue\"").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.toml");
        std::fs::write(&path, "host = \"127.0.0.1\"\nstatic_dir = \"public\"").unwrap();

        let config = ServerConfig::from_file(&path).unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.static_dir, PathBuf::from("public"));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ServerConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn test_env_overrides() {
        let config = ServerConfig::default()
            .with_env_from(env(&[
                ("PORT", "8081"),
                ("HOST", " 127.0.0.1 "),
                ("PING_MESSAGE", "pong"),
                ("VAIS_STATIC_DIR", "/srv/spa"),
            ]))
            .unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:8081");
        assert_eq!(config.ping_message, "pong");
        assert_eq!(config.static_dir, PathBuf::from("/srv/spa"));
    }

    #[test]
    fn test_empty_env_values_ignored() {
        let config = ServerConfig::default()
            .with_env_from(env(&[("PORT", ""), ("PING_MESSAGE", "  ")]))
            .unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_invalid_env_port() {
        let err = ServerConfig::default()
            .with_env_from(env(&[("PORT", "70000")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: invalid port '70000'");
    }

    #[test]
    fn test_ipv6_bind_address() {
        let config = ServerConfig {
            host: "::1".into(),
            ..ServerConfig::default()
        };
        assert_eq!(config.bind_address(), "[::1]:3000");
    }
}
