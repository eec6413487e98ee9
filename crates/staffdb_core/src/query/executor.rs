//! Read-only statement executor.
//!
//! # Responsibility
//! - Resolve the configured store path.
//! - Open, execute, drain and close within one call.
//!
//! # Invariants
//! - The connection is opened with `SQLITE_OPEN_READ_ONLY`; a write statement
//!   fails inside SQLite, not in this module.
//! - Rows are returned in engine order with no implicit sort.
//! - Exactly one statement runs per call; trailing statements are rejected,
//!   never dropped.

use crate::config::{lookup_db_path, ConfigError};
use crate::db::{open_read_only, DbError};
use crate::query::row::QueryRow;
use log::{error, info};
use rusqlite::types::Value;
use rusqlite::Batch;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type QueryResult<T> = Result<T, QueryError>;

#[derive(Debug)]
pub enum QueryError {
    /// The store path setting is missing.
    Configuration(ConfigError),
    /// Statement text is blank or only comments.
    EmptyStatement,
    /// SQLite rejected the open, the statement, or a write attempt.
    Execution(DbError),
}

impl QueryError {
    /// Returns whether the failure was a write refused by the read-only handle.
    pub fn is_read_only_violation(&self) -> bool {
        match self {
            Self::Execution(err) => err.is_read_only_violation(),
            _ => false,
        }
    }
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration(err) => write!(f, "{err}"),
            Self::EmptyStatement => write!(f, "statement text is empty"),
            Self::Execution(err) => write!(f, "query failed: {err}"),
        }
    }
}

impl Error for QueryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Configuration(err) => Some(err),
            Self::EmptyStatement => None,
            Self::Execution(err) => Some(err),
        }
    }
}

impl From<ConfigError> for QueryError {
    fn from(value: ConfigError) -> Self {
        Self::Configuration(value)
    }
}

impl From<DbError> for QueryError {
    fn from(value: DbError) -> Self {
        Self::Execution(value)
    }
}

impl From<rusqlite::Error> for QueryError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Execution(DbError::Sqlite(value))
    }
}

/// Executes caller-supplied SQL against one store file in read-only mode.
///
/// This is an administrative surface: statement text is not parameterized.
#[derive(Debug, Clone)]
pub struct ReadOnlyQueryExecutor {
    db_path: PathBuf,
}

impl ReadOnlyQueryExecutor {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Builds an executor from `SQLITE_DB_PATH`.
    ///
    /// # Errors
    /// - `Configuration` when the variable is unset or blank.
    pub fn from_env() -> QueryResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds an executor from a settings lookup keyed by variable name.
    pub fn from_lookup<F>(lookup: F) -> QueryResult<Self>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        Ok(Self::new(lookup_db_path(lookup)?))
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Executes `sql` verbatim and returns every result row.
    ///
    /// # Errors
    /// - `EmptyStatement` for blank or comment-only text.
    /// - `Execution` when the file cannot be opened, the statement is invalid
    ///   or references missing objects, it attempts a write, or the text
    ///   holds more than one statement.
    pub fn execute_read_only(&self, sql: &str) -> QueryResult<Vec<QueryRow>> {
        if sql.trim().is_empty() {
            return Err(QueryError::EmptyStatement);
        }

        let started_at = Instant::now();
        match self.run(sql) {
            Ok(rows) => {
                info!(
                    "event=query_exec module=query status=ok rows={} duration_ms={}",
                    rows.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(rows)
            }
            Err(err) => {
                error!(
                    "event=query_exec module=query status=error duration_ms={} read_only_violation={} error={}",
                    started_at.elapsed().as_millis(),
                    err.is_read_only_violation(),
                    err
                );
                Err(err)
            }
        }
    }

    fn run(&self, sql: &str) -> QueryResult<Vec<QueryRow>> {
        let conn = open_read_only(&self.db_path)?;
        let mut batch = Batch::new(&conn, sql);
        let Some(mut stmt) = batch.next()? else {
            return Err(QueryError::EmptyStatement);
        };
        if batch.next()?.is_some() {
            return Err(rusqlite::Error::MultipleStatement.into());
        }

        let column_names = stmt
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();

        let mut rows = stmt.query([])?;
        let mut result = Vec::new();
        while let Some(row) = rows.next()? {
            let mut columns = Vec::with_capacity(column_names.len());
            for (index, name) in column_names.iter().enumerate() {
                let value = Value::from(row.get_ref(index)?);
                columns.push((name.clone(), value));
            }
            result.push(QueryRow::new(columns));
        }

        Ok(result)
    }
}
