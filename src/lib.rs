//! rowdex - an append-only in-memory row store with lazily maintained
//! secondary indexes
//!
//! Rows are appended to a [`Store`]. A [`Selector`] materializes a
//! predicate over the store as an ascending list of matching positions and
//! catches up incrementally, scanning only rows added since it last looked.
//! A [`Query`] intersects selectors by sorted merge-join, most selective
//! first, and yields the matching rows in position order.
//!
//! ```
//! use rowdex::Store;
//!
//! let store = Store::new();
//! let sevens = store.add_selector(|i: &u64| i % 7 == 0);
//! let thirteens = store.add_selector(|i: &u64| i % 13 == 0);
//! store.extend(0..200);
//!
//! let query = store
//!     .create_query()
//!     .select(&sevens)?
//!     .select(&thirteens)?;
//! assert_eq!(query.rows().collect::<Vec<_>>(), vec![0, 91, 182]);
//! # Ok::<(), rowdex::query::QueryError>(())
//! ```

pub mod cli;
pub mod index;
mod observability;
pub mod query;
pub mod selector;
pub mod store;

pub use index::{Index, Position, SortedIndex};
pub use query::Query;
pub use selector::Selector;
pub use store::{Store, StoreConfig};
