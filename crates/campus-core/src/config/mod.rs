//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod payments;
pub mod server;
pub mod session;

use serde::{Deserialize, Serialize};

use self::payments::PaymentsConfig;
use self::server::ServerConfig;
pub use self::session::SessionConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Credential vault settings.
    #[serde(default)]
    pub credentials: CredentialsConfig,
    /// Session management settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Attendance import settings.
    #[serde(default)]
    pub import: ImportConfig,
    /// Local file storage settings (receipts, static assets).
    #[serde(default)]
    pub storage: StorageConfig,
    /// Payment gateway settings.
    #[serde(default)]
    pub payments: PaymentsConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Database connection pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite connection URL (e.g. `sqlite://data/campus.db`).
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

/// Credential vault configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Path to the line-oriented `principal:secret` credentials file.
    #[serde(default = "default_credentials_path")]
    pub path: String,
    /// Reserved superuser principal name.
    #[serde(default = "default_superuser")]
    pub superuser: String,
    /// Initial superuser secret, written on first run only.
    #[serde(default = "default_superuser_secret")]
    pub superuser_secret: String,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            path: default_credentials_path(),
            superuser: default_superuser(),
            superuser_secret: default_superuser_secret(),
        }
    }
}

/// Attendance import configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Path to the master attendance CSV consumed by `/attendance/sync`.
    #[serde(default = "default_master_path")]
    pub master_path: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            master_path: default_master_path(),
        }
    }
}

/// Local file storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory where uploaded fee receipts are stored.
    #[serde(default = "default_receipts_dir")]
    pub receipts_dir: String,
    /// Directory served under `/static` (empty = disabled).
    #[serde(default)]
    pub static_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            receipts_dir: default_receipts_dir(),
            static_dir: String::new(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log filter (overridden by `RUST_LOG`).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format: `pretty` or `json`.
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `CAMPUS__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("CAMPUS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

fn default_database_url() -> String {
    "sqlite://data/campus.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_credentials_path() -> String {
    "data/credentials.txt".to_string()
}

fn default_superuser() -> String {
    "superuser".to_string()
}

fn default_superuser_secret() -> String {
    "qwerty".to_string()
}

fn default_master_path() -> String {
    "data/attendance_master.csv".to_string()
}

fn default_receipts_dir() -> String {
    "data/receipts".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
