//! Query builder and executor
//!
//! A query is a list of selectors over one store. Executing it:
//!
//! 1. Catch every selector up and read its match count
//! 2. Order selectors ascending by that count (stable)
//! 3. Fold them left through `Index::and`
//! 4. Map the resulting positions back to rows
//!
//! Joining smallest first keeps each merge bounded by the most selective
//! operand instead of by the table.

use crate::index::{Index, Positions, RangeIndex};
use crate::observability::log_debug;
use crate::selector::Selector;
use crate::store::Store;

use super::errors::{QueryError, QueryResult};
use super::plan::QueryPlan;
use super::rows::Rows;

/// A conjunction of selectors over one store.
///
/// Holds nothing but its store handle and the selectors in selection
/// order; every execution re-plans from the selectors' current sizes.
pub struct Query<T> {
    store: Store<T>,
    selectors: Vec<Selector<T>>,
}

impl<T> Query<T> {
    pub(crate) fn new(store: Store<T>) -> Self {
        Self {
            store,
            selectors: Vec::new(),
        }
    }

    /// Adds `selector` to the conjunction.
    ///
    /// Selecting the same selector twice is allowed and intersects it with
    /// itself. Rejects a selector over a different store.
    pub fn select(mut self, selector: &Selector<T>) -> QueryResult<Self> {
        if !selector.store().same_store(&self.store) {
            return Err(QueryError::ForeignSelector);
        }
        self.selectors.push(selector.clone());
        Ok(self)
    }

    /// The store this query reads
    pub fn store(&self) -> &Store<T> {
        &self.store
    }

    /// Selectors in selection order
    pub fn selectors(&self) -> &[Selector<T>] {
        &self.selectors
    }

    /// Catches every selector up and plans the join order.
    pub fn plan(&self) -> QueryPlan {
        let sizes: Vec<usize> = self.selectors.iter().map(Selector::len).collect();
        QueryPlan::from_sizes(self.store.len(), &sizes)
    }

    /// Builds the composite index for the current state of the store.
    ///
    /// With no selectors this covers every row present now.
    pub fn index(&self) -> Box<dyn Index + '_> {
        let plan = self.plan();

        log_debug!(
            component = "query",
            event = "QUERY_PLANNED",
            strategy = %plan.strategy,
            table_rows = plan.table_rows,
            sizes = ?plan.steps.iter().map(|step| step.matches).collect::<Vec<_>>(),
        );

        let mut ordered = plan.join_order().map(|slot| self.selectors[slot].clone());
        match ordered.next() {
            None => Box::new(RangeIndex::first(plan.table_rows)),
            Some(first) => {
                let mut composite: Box<dyn Index + '_> = Box::new(first);
                for next in ordered {
                    composite = Box::new(composite.and(next));
                }
                composite
            }
        }
    }

    /// Matching positions, ascending
    pub fn positions(&self) -> Positions {
        self.index().positions()
    }

    /// Number of matching rows
    pub fn count(&self) -> usize {
        self.positions().count()
    }

    /// Matching rows in ascending position order.
    ///
    /// Rows are copied out in batches, each under one read lock.
    pub fn rows(&self) -> Rows<T>
    where
        T: Clone,
    {
        Rows::new(self.store.clone(), self.positions())
    }
}

impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            selectors: self.selectors.clone(),
        }
    }
}

impl<T> std::fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Query")
            .field("selectors", &self.selectors)
            .finish()
    }
}
