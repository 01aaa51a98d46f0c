//! Store configuration errors
//!
//! Error codes:
//! - ROWDEX_CONFIG_IO
//! - ROWDEX_CONFIG_PARSE
//! - ROWDEX_CONFIG_INVALID

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading or validating a [`StoreConfig`](super::StoreConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that failed to load
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Config text is not valid JSON for the config schema
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Config parsed but a field is out of range
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "ROWDEX_CONFIG_IO",
            ConfigError::Parse(_) => "ROWDEX_CONFIG_PARSE",
            ConfigError::Invalid(_) => "ROWDEX_CONFIG_INVALID",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let invalid = ConfigError::Invalid("preview_limit".into());
        assert_eq!(invalid.code(), "ROWDEX_CONFIG_INVALID");

        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(ConfigError::from(parse).code(), "ROWDEX_CONFIG_PARSE");

        let io = ConfigError::Io {
            path: PathBuf::from("missing.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(io.code(), "ROWDEX_CONFIG_IO");
        assert!(io.to_string().contains("missing.json"));
    }
}
