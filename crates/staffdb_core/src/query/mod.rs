//! Privileged ad-hoc SQL execution.
//!
//! # Responsibility
//! - Run caller-supplied statement text against a read-only handle.
//! - Return rows as ordered column-name to value mappings.
//!
//! # Invariants
//! - Statement text is executed verbatim; this path must never be fed
//!   untrusted input. SQLite's read-only open mode is the only write guard.
//! - Errors are propagated unchanged, never collapsed into empty results.

mod executor;
mod row;

pub use executor::{QueryError, QueryResult, ReadOnlyQueryExecutor};
pub use row::QueryRow;
