//! Startup configuration, read once from environment variables.
//!
//! Every setting has a default so the server runs with no environment at
//! all. Log filtering is handled separately by `env_logger` via `RUST_LOG`.

use std::env;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address. `SITEGEN_HOST`, default `127.0.0.1`.
    pub host: String,
    /// Bind port. `SITEGEN_PORT`, default `8080`.
    pub port: u16,
    /// Path of the analytics SQLite database. `SITEGEN_DB`,
    /// default `sitegen.sqlite`.
    pub db_path: String,
}

impl Config {
    pub fn from_env() -> Self {
        let host = env::var("SITEGEN_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SITEGEN_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(8080);
        let db_path = env::var("SITEGEN_DB").unwrap_or_else(|_| "sitegen.sqlite".to_string());
        Self {
            host,
            port,
            db_path,
        }
    }
}
