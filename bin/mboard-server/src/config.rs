//! Server configuration, loaded from environment variables at startup.

use std::path::{Path, PathBuf};

/// Runtime configuration for mboard-server.
///
/// Every field has a sensible default so the server works out-of-the-box
/// without any environment variables set.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the SQLite database file (default: `"./data"`).
    /// Created on startup when missing.
    pub db_path: String,

    /// Interface to bind (default: `"127.0.0.1"`).
    pub host: String,

    /// TCP port to listen on (default: `5000`).
    pub port: u16,

    /// Deployment environment name reported by the health endpoint
    /// (default: `"development"`).
    pub environment: String,

    /// Serve Swagger UI at `/swagger-ui` (default: `true`).
    pub enable_swagger: bool,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            db_path: env_or("DB_PATH", "./data"),
            host: env_or("HOST", "127.0.0.1"),
            port: parse_env("PORT", 5000),
            environment: env_or("ENVIRONMENT", "development"),
            enable_swagger: std::env::var("ENABLE_SWAGGER")
                .map(|v| !(v == "0" || v.eq_ignore_ascii_case("false")))
                .unwrap_or(true),
            log_json: std::env::var("LOG_JSON")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }

    /// Full path of the SQLite database file inside [`Config::db_path`].
    pub fn database_path(&self) -> PathBuf {
        Path::new(&self.db_path).join("database.db")
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
