//! Configuration management for the web service
//!
//! Supports loading configuration from environment variables with fallback to defaults.

use std::path::PathBuf;

/// Runtime settings for the server
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Port to bind on localhost
    pub port: u16,

    /// Directory holding the per-session JSON files
    pub session_dir: PathBuf,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            session_dir: PathBuf::from("./sessions"),
        }
    }
}

impl ServiceConfig {
    /// Load settings from environment variables.
    ///
    /// Environment variables:
    /// - `TODO_PORT`: port to listen on (default: 8080)
    /// - `TODO_SESSION_DIR`: session storage directory (default: ./sessions)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: std::env::var("TODO_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            session_dir: std::env::var("TODO_SESSION_DIR")
                .ok()
                .map(PathBuf::from)
                .unwrap_or(defaults.session_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.session_dir, PathBuf::from("./sessions"));
    }
}
