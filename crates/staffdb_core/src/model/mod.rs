//! Domain records for the employee store.
//!
//! # Responsibility
//! - Define the value snapshots exchanged between storage and callers.
//!
//! # Invariants
//! - Records carry no handle back to storage; mutating one never writes.
//! - Identifiers are assigned by SQLite, never by callers.

pub mod department;
pub mod employee;
