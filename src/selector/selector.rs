//! Selector: a lazily maintained predicate index over one store
//!
//! A selector remembers how far into the table it has looked (the
//! watermark) and which positions matched so far (`retained`). Every
//! observation first catches up: it scans only the rows appended since the
//! last observation and appends their matching positions. Positions are
//! scanned in order, so `retained` stays strictly ascending without any
//! sorting.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::index::{Index, Position, Positions, SnapshotIter};
use crate::observability::log_trace;
use crate::store::Store;

use super::preview;

type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// A predicate materialized as an ascending list of matching positions.
///
/// Cloning yields another handle to the same selector. Created through
/// [`Store::add_selector`].
pub struct Selector<T> {
    inner: Arc<SelectorInner<T>>,
}

struct SelectorInner<T> {
    store: Store<T>,
    predicate: Predicate<T>,
    state: Mutex<SelectorState>,
}

/// For every `p < watermark`, `p` is in `retained` iff the predicate holds
/// for row `p`. Rows at or past the watermark have not been looked at.
#[derive(Debug, Default)]
struct SelectorState {
    retained: Arc<Vec<Position>>,
    watermark: usize,
}

impl<T> Selector<T> {
    pub(crate) fn new<F>(store: Store<T>, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let selector = Self {
            inner: Arc::new(SelectorInner {
                store,
                predicate: Box::new(predicate),
                state: Mutex::new(SelectorState::default()),
            }),
        };
        drop(selector.catch_up());
        selector
    }

    /// Number of matching rows, after catching up
    pub fn len(&self) -> usize {
        self.catch_up().retained.len()
    }

    /// Returns true if no row matches, after catching up
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rows examined so far, without catching up
    pub fn indexed_rows(&self) -> usize {
        self.lock_state().watermark
    }

    /// The store this selector reads from
    pub fn store(&self) -> &Store<T> {
        &self.inner.store
    }

    /// Returns true if both handles refer to the same selector
    pub fn same_selector(&self, other: &Selector<T>) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn lock_state(&self) -> MutexGuard<'_, SelectorState> {
        self.inner.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Scans rows appended since the last observation.
    ///
    /// The watermark moves past a row only once its predicate call has
    /// returned, so if the predicate panics the state is still consistent
    /// (the lock poison is ignored) and that row is retried next time.
    fn catch_up(&self) -> MutexGuard<'_, SelectorState> {
        let mut state = self.lock_state();
        let rows = self.inner.store.read_rows();
        let start = state.watermark;

        if start < rows.len() {
            let SelectorState {
                retained,
                watermark,
            } = &mut *state;
            // Copies only if a live traversal still holds the old snapshot.
            let matches = Arc::make_mut(retained);
            let before = matches.len();

            for (offset, row) in rows[start..].iter().enumerate() {
                let position = start + offset;
                if (self.inner.predicate)(row) {
                    matches.push(position);
                }
                *watermark = position + 1;
            }

            log_trace!(
                component = "selector",
                event = "SELECTOR_CATCH_UP",
                scanned = rows.len() - start,
                matched = matches.len() - before,
                watermark = *watermark,
            );
        }

        drop(rows);
        state
    }
}

impl<T> Index for Selector<T> {
    /// Catches up, then walks a snapshot of the matches.
    ///
    /// Rows appended during the traversal are not seen by it.
    fn positions(&self) -> Positions {
        let retained = Arc::clone(&self.catch_up().retained);
        Box::new(SnapshotIter::new(retained))
    }
}

impl<T> Clone for Selector<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.catch_up();
        let rows = self.inner.store.read_rows();
        let limit = self.inner.store.config().preview_limit;
        f.write_str(&preview::render(state.retained.as_slice(), rows.as_slice(), limit))
    }
}

impl<T> fmt::Debug for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock_state();
        f.debug_struct("Selector")
            .field("matched", &state.retained.len())
            .field("indexed_rows", &state.watermark)
            .finish()
    }
}
