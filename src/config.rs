//! Configuration loading and constants.
//!
//! All runtime configuration comes from environment variables, read once at
//! startup into `AppConfig`. There is no config file; the service is meant to
//! be configured by its deployment environment (container env, systemd unit).

use std::env;

/// Default listen port when `PORT` is not set
pub const DEFAULT_PORT: u16 = 3000;

/// Bind address for the listening socket
pub const BIND_HOST: &str = "0.0.0.0";

/// Default environment string when `NODE_ENV` is not set
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Environment variable holding the listen port
pub const ENV_PORT: &str = "PORT";

/// Environment variable holding the reported environment name
pub const ENV_ENVIRONMENT: &str = "NODE_ENV";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "beacon=debug";

/// Grace period for draining in-flight requests on shutdown
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

/// Application configuration, populated once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Environment name reported by the root endpoint ("development", "production", ...)
    pub environment: String,
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from process environment variables.
    ///
    /// `PORT` defaults to 3000; a value that is not a valid port number is a
    /// startup error rather than a silent fallback. `NODE_ENV` defaults to
    /// "development".
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::var(ENV_PORT).ok(), env::var(ENV_ENVIRONMENT).ok())
    }

    fn from_vars(port: Option<String>, environment: Option<String>) -> Result<Self, ConfigError> {
        let port = match port {
            Some(raw) => raw
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value: raw, source })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            http: HttpServerConfig {
                host: BIND_HOST.to_string(),
                port,
            },
            environment: environment.unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}
