//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code.

use std::io;

use thiserror::Error;

use crate::query::QueryError;
use crate::store::ConfigError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Config file missing, malformed or out of range
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Query could not be built
    #[error(transparent)]
    Query(#[from] QueryError),

    /// A command-line argument is out of range
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing the report failed
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    /// Encoding the report as JSON failed
    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),

    /// A global tracing subscriber could not be installed
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

impl CliError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Config(inner) => inner.code(),
            CliError::Query(inner) => inner.code(),
            CliError::InvalidArgument(_) => "ROWDEX_CLI_INVALID_ARGUMENT",
            CliError::Io(_) => "ROWDEX_CLI_IO_ERROR",
            CliError::Encode(_) => "ROWDEX_CLI_ENCODE_ERROR",
            CliError::Logging(_) => "ROWDEX_CLI_LOGGING_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_forward_inner_errors() {
        let err = CliError::from(QueryError::ForeignSelector);
        assert_eq!(err.code(), "ROWDEX_QUERY_FOREIGN_SELECTOR");

        let err = CliError::from(ConfigError::Invalid("x".into()));
        assert_eq!(err.code(), "ROWDEX_CONFIG_INVALID");
    }

    #[test]
    fn test_invalid_argument() {
        let err = CliError::InvalidArgument("--modulo must be non-zero".into());
        assert_eq!(err.code(), "ROWDEX_CLI_INVALID_ARGUMENT");
        assert_eq!(err.to_string(), "invalid argument: --modulo must be non-zero");
    }
}
