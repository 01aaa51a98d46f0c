//! Store subsystem for rowdex
//!
//! The store is the table: an append-only sequence of rows addressed by
//! 0-based position. It owns no indexes; selectors attach to it and catch
//! up on demand.
//!
//! # Invariants
//!
//! - Positions are contiguous from 0
//! - Rows are never removed or mutated
//! - `len()` never decreases

mod config;
mod errors;
mod store;

pub use config::StoreConfig;
pub use errors::{ConfigError, ConfigResult};
pub use store::Store;
