//! Index error types
//!
//! Error codes:
//! - ROWDEX_INDEX_NOT_ASCENDING (REJECT)

use thiserror::Error;

use super::Position;

/// Result type for index construction
pub type IndexResult<T> = Result<T, IndexError>;

/// Errors raised while building an index from caller-supplied positions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// The list is not strictly ascending (out of order or duplicated)
    #[error("positions must be strictly ascending: {previous} followed by {current} at slot {slot}")]
    NotAscending {
        /// Slot in the list where the violation was found
        slot: usize,
        /// Position preceding the violation
        previous: Position,
        /// Offending position
        current: Position,
    },
}

impl IndexError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            IndexError::NotAscending { .. } => "ROWDEX_INDEX_NOT_ASCENDING",
        }
    }
}
