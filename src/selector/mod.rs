//! Selector subsystem for rowdex
//!
//! A selector is a secondary index over one store: the ascending list of
//! positions whose rows satisfy a predicate. It is maintained lazily.
//! Nothing happens on `Store::add`; each observation (`len`, `positions`,
//! display, use inside a query) scans only the rows appended since the
//! previous one.
//!
//! # Invariants
//!
//! - The predicate runs at most once per row (a panicking call is retried)
//! - Matches are strictly ascending with no duplicates
//! - After catching up, the matches are exactly the rows satisfying the
//!   predicate, whenever the selector was created

mod preview;
mod selector;

pub use preview::ELLIPSIS;
pub use selector::Selector;
