//! Query subsystem for rowdex
//!
//! A query composes selectors into one sorted intersection and exposes the
//! matching rows as an ordered sequence.
//!
//! # Execution
//!
//! - No selectors: every row
//! - One selector: its matches directly
//! - Several: merge-join, ascending by current match count
//!
//! # Guarantees
//!
//! - Results are in strictly ascending position order, each row once
//! - Parallel mapping keeps that order

mod errors;
mod parallel;
mod plan;
mod query;
mod rows;

pub use errors::{QueryError, QueryResult};
pub use plan::{PlanStep, QueryPlan, Strategy};
pub use query::Query;
pub use rows::Rows;
