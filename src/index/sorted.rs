//! Concrete leaf indexes: a wrapped sorted list and a contiguous range

use std::ops::Range;
use std::sync::Arc;

use super::errors::{IndexError, IndexResult};
use super::positions::{Index, Position, Positions, SnapshotIter};

/// An index over a caller-supplied list of ascending positions.
///
/// The list is shared, so cloning the index and traversing it are both
/// O(1) to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedIndex {
    positions: Arc<Vec<Position>>,
}

impl SortedIndex {
    /// Wraps a list the caller guarantees is strictly ascending.
    ///
    /// Order is not checked. An unsorted list makes every intersection
    /// built on top of it silently wrong; use [`SortedIndex::try_of`] for
    /// untrusted input.
    pub fn of(positions: Vec<Position>) -> Self {
        Self {
            positions: Arc::new(positions),
        }
    }

    /// Wraps a list after checking that it is strictly ascending.
    pub fn try_of(positions: Vec<Position>) -> IndexResult<Self> {
        if let Some(slot) = positions.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(IndexError::NotAscending {
                slot: slot + 1,
                previous: positions[slot],
                current: positions[slot + 1],
            });
        }
        Ok(Self::of(positions))
    }

    /// Returns the number of positions
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if there are no positions
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the wrapped positions
    pub fn as_slice(&self) -> &[Position] {
        &self.positions
    }
}

impl Index for SortedIndex {
    fn positions(&self) -> Positions {
        Box::new(SnapshotIter::new(Arc::clone(&self.positions)))
    }
}

impl From<Vec<Position>> for SortedIndex {
    fn from(positions: Vec<Position>) -> Self {
        Self::of(positions)
    }
}

/// Identity index over a contiguous block of positions.
///
/// A query with no selectors uses this to cover every row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeIndex {
    range: Range<Position>,
}

impl RangeIndex {
    /// Covers `range.start..range.end`
    pub fn new(range: Range<Position>) -> Self {
        Self { range }
    }

    /// Covers `0..len`
    pub fn first(len: usize) -> Self {
        Self::new(0..len)
    }

    /// Returns the number of positions covered
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// Returns true if the range is empty
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

impl Index for RangeIndex {
    fn positions(&self) -> Positions {
        Box::new(self.range.clone())
    }
}
