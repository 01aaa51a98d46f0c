//! Query error types
//!
//! Error codes:
//! - ROWDEX_QUERY_FOREIGN_SELECTOR (REJECT)

use thiserror::Error;

/// Result type for query building
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised while building a query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The selector indexes a different store than the query reads
    #[error("selector is bound to a different store than the query")]
    ForeignSelector,
}

impl QueryError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::ForeignSelector => "ROWDEX_QUERY_FOREIGN_SELECTOR",
        }
    }
}
