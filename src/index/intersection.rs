//! Lazy intersection of two indexes by sorted merge-join
//!
//! Both operands yield ascending, duplicate-free positions, so a single
//! two-pointer pass finds every common position in O(|A| + |B|):
//!
//! - equal heads: yield, advance both
//! - otherwise: advance the side holding the smaller head
//! - either side exhausted: stop

use std::cmp::Ordering;
use std::iter::FusedIterator;

use super::positions::{Index, Position, Positions};

/// The intersection of two indexes.
///
/// Holds its operands and does no work until traversed. Each call to
/// [`Index::positions`] starts a new merge over fresh traversals of both
/// operands, so selectors among them catch up again.
#[derive(Debug, Clone)]
pub struct Intersection<A, B> {
    left: A,
    right: B,
}

impl<A: Index, B: Index> Intersection<A, B> {
    /// Creates the intersection of `left` and `right`
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<A: Index, B: Index> Index for Intersection<A, B> {
    fn positions(&self) -> Positions {
        Box::new(MergeJoin::new(self.left.positions(), self.right.positions()))
    }
}

/// Two-pointer merge over two ascending traversals.
pub struct MergeJoin {
    left: Positions,
    right: Positions,
    done: bool,
}

impl MergeJoin {
    /// Merges two ascending traversals
    pub fn new(left: Positions, right: Positions) -> Self {
        Self {
            left,
            right,
            done: false,
        }
    }

    fn advance(&mut self) -> Option<Position> {
        let mut a = self.left.next()?;
        let mut b = self.right.next()?;
        loop {
            match a.cmp(&b) {
                Ordering::Equal => return Some(a),
                Ordering::Less => a = self.left.next()?,
                Ordering::Greater => b = self.right.next()?,
            }
        }
    }
}

impl Iterator for MergeJoin {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.done {
            return None;
        }
        let found = self.advance();
        if found.is_none() {
            // Operands need not be fused themselves.
            self.done = true;
        }
        found
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let upper = match (self.left.size_hint().1, self.right.size_hint().1) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, b) => b,
        };
        (0, upper)
    }
}

impl FusedIterator for MergeJoin {}

impl std::fmt::Debug for MergeJoin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MergeJoin").field("done", &self.done).finish()
    }
}
