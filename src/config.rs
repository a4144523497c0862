//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! All variables are optional and have local-development defaults:
//!
//! - `DATABASE_URL` - SQLite connection string (default: `sqlite:./shortio.db`;
//!   the file is created on first start)
//! - `BASE_URL` - Public address used to build `short_url` fields
//!   (default: `http://localhost:3000`; trailing slash is trimmed)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `ERROR_REPORT_DSN` - When set to a valid http(s) URL, server errors are
//!   forwarded to this endpoint; otherwise crash reporting is disabled
//! - `DB_MAX_CONNECTIONS` - Connection pool size (default: 10)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Public base address, no trailing slash.
    pub base_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Crash-report endpoint. `None` disables external reporting entirely.
    pub error_report_dsn: Option<String>,
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:./shortio.db".to_string());

        let base_url = env::var("BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .trim_end_matches('/')
            .to_string();

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let error_report_dsn = env::var("ERROR_REPORT_DSN")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Self {
            database_url,
            base_url,
            listen_addr,
            log_level,
            log_format,
            error_report_dsn,
            db_max_connections,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `DATABASE_URL` is not a `sqlite:` connection string
    /// - `LOG_FORMAT` is not `text` or `json`
    /// - `LISTEN` is not in `host:port` form
    /// - `DB_MAX_CONNECTIONS` is zero
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!("LOG_FORMAT must be 'text' or 'json', got '{}'", self.log_format);
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!("LISTEN must look like 'host:port', got '{}'", self.listen_addr);
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be positive");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Base URL: {}", self.base_url);

        if self.error_report_dsn.is_some() {
            tracing::info!("  Error reporting: enabled");
        } else {
            tracing::info!("  Error reporting: disabled");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
