//! Index subsystem for rowdex
//!
//! An index is a capability, not a stored structure: it produces a fresh,
//! strictly ascending, duplicate-free traversal of row positions on every
//! call, and composes with other indexes by intersection.
//!
//! # Invariants
//!
//! - Traversals are ascending with no duplicates
//! - Traversals are repeatable and independent of each other
//! - `a.and(b)` costs O(|a| + |b|) per traversal

mod errors;
mod intersection;
mod positions;
mod sorted;

pub use errors::{IndexError, IndexResult};
pub use intersection::{Intersection, MergeJoin};
pub use positions::{Index, Position, Positions, SnapshotIter};
pub use sorted::{RangeIndex, SortedIndex};
