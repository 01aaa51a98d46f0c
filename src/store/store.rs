//! Append-only row store
//!
//! `Store<T>` is a cheap, cloneable handle. Clones share one table, one
//! config, and are identified by pointer (`same_store`). Selectors and
//! queries keep their own handle instead of borrowing the store.

use std::fmt;
use std::ops::Range;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::index::Position;
use crate::query::Query;
use crate::selector::Selector;

use super::config::StoreConfig;

/// An append-only, in-memory table of rows.
///
/// Rows are numbered from 0 in insertion order and never move, change or
/// disappear, so `len()` only ever grows.
///
/// Mutation is single-writer: every `add` must happen-before any
/// concurrent read or query on the same store.
pub struct Store<T> {
    rows: Arc<RwLock<Vec<T>>>,
    config: Arc<StoreConfig>,
}

impl<T> Store<T> {
    /// Creates an empty store with the default config
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Creates an empty store, pre-allocating `config.initial_capacity` rows
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            rows: Arc::new(RwLock::new(Vec::with_capacity(config.initial_capacity))),
            config: Arc::new(config),
        }
    }

    /// Returns the store's config
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Appends `element` and returns its position.
    ///
    /// The position is the row count before the append.
    pub fn add(&self, element: T) -> Position {
        let mut rows = self.write_rows();
        let position = rows.len();
        rows.push(element);
        position
    }

    /// Appends every element in order under a single write lock.
    ///
    /// Returns the positions that were assigned.
    pub fn extend<I>(&self, elements: I) -> Range<Position>
    where
        I: IntoIterator<Item = T>,
    {
        let mut rows = self.write_rows();
        let start = rows.len();
        rows.extend(elements);
        start..rows.len()
    }

    /// Returns the number of rows
    pub fn len(&self) -> usize {
        self.read_rows().len()
    }

    /// Returns true if no row has been added yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of the element at `position`, if it exists
    pub fn get(&self, position: Position) -> Option<T>
    where
        T: Clone,
    {
        self.read_rows().get(position).cloned()
    }

    /// Returns true if both handles refer to the same table
    pub fn same_store(&self, other: &Store<T>) -> bool {
        Arc::ptr_eq(&self.rows, &other.rows)
    }

    /// Creates a selector over this store, caught up to every row present now.
    ///
    /// The predicate is called at most once per row for the selector's
    /// lifetime. It runs while the store is read-locked, so it must not
    /// call back into this store.
    pub fn add_selector<F>(&self, predicate: F) -> Selector<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Selector::new(self.clone(), predicate)
    }

    /// Creates a query over this store with no selectors
    pub fn create_query(&self) -> Query<T> {
        Query::new(self.clone())
    }

    /// Read access to the whole table.
    ///
    /// Rows are never mutated in place, so a poisoned lock still guards a
    /// valid table.
    pub(crate) fn read_rows(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.rows.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_rows(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.rows.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
            config: Arc::clone(&self.config),
        }
    }
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("len", &self.len())
            .field("config", &self.config)
            .finish()
    }
}
