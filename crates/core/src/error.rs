//! Unified error types for rawfetch.
//!
//! Every variant renders with a stable code prefix so messages stay
//! greppable when surfaced on the command line.

use crate::config::ConfigError;

/// Unified error types for a single fetch and the cache behind it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input could not be turned into a fetch target.
    #[error("INVALID_URL: {0}")]
    InvalidUrl(String),

    /// DNS, connect, TLS handshake, write or read failure.
    #[error("TRANSPORT_ERROR: {0}")]
    Transport(#[source] std::io::Error),

    /// Missing header/body separator or unparsable status line.
    #[error("MALFORMED_RESPONSE: {0}")]
    MalformedResponse(String),

    /// Any status other than 200.
    #[error("UNEXPECTED_STATUS: {0}")]
    UnexpectedStatus(u16),

    /// The response carried no Content-Type header.
    #[error("MISSING_CONTENT_TYPE: response has no Content-Type header")]
    MissingContentType,

    /// The declared Content-Type is neither HTML nor JSON.
    #[error("UNSUPPORTED_CONTENT_TYPE: {0}")]
    UnsupportedContentType(String),

    /// A JSON body failed to decode.
    #[error("DECODE_ERROR: {0}")]
    Decode(#[source] serde_json::Error),

    /// Database operation failed.
    #[error("CACHE_ERROR: {0}")]
    Database(#[from] rusqlite::Error),

    /// Migration failed to apply.
    #[error("CACHE_ERROR: migration failed: {0}")]
    MigrationFailed(String),

    /// A stored entry could not be read back.
    #[error("CACHE_ERROR: corrupt entry: {0}")]
    CorruptEntry(String),

    /// Configuration failed to load or validate.
    #[error("CONFIG_ERROR: {0}")]
    Config(#[from] ConfigError),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Transport(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnexpectedStatus(404);
        assert!(err.to_string().contains("UNEXPECTED_STATUS"));
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_transport_error_keeps_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err: Error = io.into();
        assert!(matches!(err, Error::Transport(_)));
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("refused"));
    }

    #[test]
    fn test_unsupported_content_type_display() {
        let err = Error::UnsupportedContentType("text/plain".to_string());
        assert_eq!(err.to_string(), "UNSUPPORTED_CONTENT_TYPE: text/plain");
    }

    #[test]
    fn test_config_error_converts() {
        let config = crate::AppConfig { search_limit: 0, ..Default::default() };
        let err: Error = config.validate().unwrap_err().into();
        assert!(matches!(err, Error::Config(ConfigError::Invalid { .. })));
        assert!(err.to_string().starts_with("CONFIG_ERROR: invalid configuration: search_limit"));
    }
}
