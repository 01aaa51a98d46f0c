//! The `Index` capability
//!
//! An index is anything that can hand out a fresh, strictly ascending,
//! duplicate-free sequence of row positions. Every call to
//! [`Index::positions`] starts a new traversal; traversals never share a
//! cursor.

use std::sync::Arc;

use super::intersection::Intersection;

/// 0-based insertion ordinal of a row in a store
pub type Position = usize;

/// An owned traversal over ascending positions.
///
/// Owned (`'static`) so that a traversal can outlive the index that
/// produced it, and `Send` so that it can be drained on another thread.
pub type Positions = Box<dyn Iterator<Item = Position> + Send>;

/// A source of ascending, duplicate-free row positions.
pub trait Index {
    /// Starts a fresh traversal in ascending order.
    fn positions(&self) -> Positions;

    /// Intersects this index with `other` by sorted merge-join.
    ///
    /// Nothing is evaluated until the result is traversed, and every
    /// traversal of the result re-traverses both operands.
    fn and<O: Index>(self, other: O) -> Intersection<Self, O>
    where
        Self: Sized,
    {
        Intersection::new(self, other)
    }
}

impl<I: Index + ?Sized> Index for &I {
    fn positions(&self) -> Positions {
        (**self).positions()
    }
}

impl<I: Index + ?Sized> Index for Box<I> {
    fn positions(&self) -> Positions {
        (**self).positions()
    }
}

impl<I: Index + ?Sized> Index for Arc<I> {
    fn positions(&self) -> Positions {
        (**self).positions()
    }
}

/// Iterator over a shared, immutable snapshot of sorted positions.
///
/// Cloning the `Arc` is all it costs to start one, so many of these can
/// walk the same list at once.
#[derive(Debug, Clone)]
pub struct SnapshotIter {
    positions: Arc<Vec<Position>>,
    next: usize,
}

impl SnapshotIter {
    pub(crate) fn new(positions: Arc<Vec<Position>>) -> Self {
        Self { positions, next: 0 }
    }
}

impl Iterator for SnapshotIter {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let position = self.positions.get(self.next).copied()?;
        self.next += 1;
        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.positions.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SnapshotIter {}

impl std::iter::FusedIterator for SnapshotIter {}
