//! Shared application state for request handlers.

use std::sync::Arc;
use std::time::Instant;

use crate::config::AppConfig;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Holds the startup configuration, the machine hostname (resolved once), and
/// the process start instant used to report uptime. Nothing here is mutable
/// after startup; requests share it read-only.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub hostname: Arc<str>,
    started_at: Instant,
}

impl AppState {
    /// Creates application state from the given configuration, resolving the
    /// hostname and capturing the process start time.
    pub fn new(config: AppConfig) -> Self {
        let hostname = gethostname::gethostname().to_string_lossy().into_owned();
        Self {
            config: Arc::new(config),
            hostname: hostname.into(),
            started_at: Instant::now(),
        }
    }

    /// Fractional seconds since the service started.
    pub fn uptime_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HttpServerConfig, DEFAULT_ENVIRONMENT, DEFAULT_PORT};

    #[test]
    fn uptime_is_non_negative_and_monotonic() {
        let config = AppConfig {
            http: HttpServerConfig {
                host: "127.0.0.1".to_string(),
                port: DEFAULT_PORT,
            },
            environment: DEFAULT_ENVIRONMENT.to_string(),
        };
        let state = AppState::new(config);
        let first = state.uptime_secs();
        assert!(first >= 0.0);
        assert!(state.uptime_secs() >= first);
    }
}
