//! Configuration validation rules.
//!
//! Validation logic for `AppConfig` values after they have been loaded
//! from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `search_limit` is 0 or exceeds 100
    /// - `search_url` is not an absolute http(s) URL
    /// - `db_path` is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_limit == 0 {
            return Err(ConfigError::Invalid { field: "search_limit".into(), reason: "must be greater than 0".into() });
        }
        if self.search_limit > 100 {
            return Err(ConfigError::Invalid { field: "search_limit".into(), reason: "must not exceed 100".into() });
        }

        match url::Url::parse(&self.search_url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some() => {}
            Ok(parsed) => {
                return Err(ConfigError::Invalid {
                    field: "search_url".into(),
                    reason: format!("unsupported scheme: {}", parsed.scheme()),
                });
            }
            Err(e) => {
                return Err(ConfigError::Invalid { field: "search_url".into(), reason: e.to_string() });
            }
        }

        if self.db_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid { field: "db_path".into(), reason: "must not be empty".into() });
        }

        if !self.cache_enabled {
            tracing::debug!(db_path = %self.db_path.display(), "cache disabled; db_path is ignored");
        }

        Ok(())
    }
}
