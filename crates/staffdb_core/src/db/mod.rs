//! SQLite storage bootstrap and schema entry points.
//!
//! # Responsibility
//! - Create the backing file and the two-table schema on first use.
//! - Hand out short-lived connections, one per logical operation.
//! - Open engine-enforced read-only connections for ad-hoc queries.
//!
//! # Invariants
//! - Schema creation is idempotent; there is no migration step.
//! - No connection outlives the operation that opened it.
//! - `PRAGMA foreign_keys` stays off, so `employees.department_id` is only
//!   checked by the service layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub use open::{ensure_schema, open_read_only, Database};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
}

impl DbError {
    /// Returns whether SQLite refused a write on a read-only handle.
    pub fn is_read_only_violation(&self) -> bool {
        match self {
            Self::Sqlite(rusqlite::Error::SqliteFailure(err, _)) => {
                err.code == rusqlite::ErrorCode::ReadOnly
            }
            Self::Sqlite(_) => false,
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
