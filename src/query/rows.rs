//! Ordered element stream over a query's matching positions

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::index::Positions;
use crate::store::Store;

/// Positions resolved per read lock.
const BATCH: usize = 256;

/// Rows matching a query, in ascending position order, each exactly once.
///
/// Positions are pulled lazily from the composite index, resolved a batch
/// at a time, and copied out of the store.
pub struct Rows<T> {
    store: Store<T>,
    positions: Positions,
    buffer: VecDeque<T>,
}

impl<T: Clone> Rows<T> {
    pub(crate) fn new(store: Store<T>, positions: Positions) -> Self {
        Self {
            store,
            positions,
            buffer: VecDeque::with_capacity(BATCH),
        }
    }

    fn refill(&mut self) {
        let rows = self.store.read_rows();
        for position in self.positions.by_ref().take(BATCH) {
            // Every position came from this store, whose rows never go away.
            if let Some(row) = rows.get(position) {
                self.buffer.push_back(row.clone());
            }
        }
    }
}

impl<T: Clone> Iterator for Rows<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.buffer.is_empty() {
            self.refill();
        }
        self.buffer.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.positions.size_hint();
        let buffered = self.buffer.len();
        (
            lower.saturating_add(buffered),
            upper.and_then(|upper| upper.checked_add(buffered)),
        )
    }
}

impl<T: Clone> FusedIterator for Rows<T> {}
