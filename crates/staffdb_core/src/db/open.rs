//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Create the store file and schema once, then act as a connection factory.
//! - Open per-operation read-write connections.
//! - Open read-only connections that SQLite itself refuses to write through.
//!
//! # Invariants
//! - `Database` never holds an open handle; it only remembers the path.
//! - Read-only opens never create the file.

use super::schema::{apply_schema, table_names};
use super::DbResult;
use log::{debug, error, info};
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection factory for an initialized store file.
///
/// Cloning is cheap; every clone opens its own connections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Path of the backing SQLite file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a read-write connection scoped to one operation.
    ///
    /// The caller drops the returned connection before returning, which
    /// releases the handle on every exit path.
    pub fn connect(&self) -> DbResult<Connection> {
        debug!(
            "event=db_open module=db status=start mode=read_write path={}",
            self.path.display()
        );
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }

    /// Lists user tables currently present in the store.
    pub fn table_names(&self) -> DbResult<Vec<String>> {
        let conn = self.connect()?;
        table_names(&conn)
    }
}

/// Opens (creating if needed) the store at `path` and ensures both tables exist.
///
/// # Side effects
/// - Creates the file when it does not exist.
/// - Emits `db_schema` logging events with duration and status.
pub fn ensure_schema(path: impl AsRef<Path>) -> DbResult<Database> {
    let started_at = Instant::now();
    let path = path.as_ref().to_path_buf();
    info!("event=db_schema module=db status=start path={}", path.display());

    match bootstrap_schema(&path) {
        Ok(()) => {
            info!(
                "event=db_schema module=db status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(Database { path })
        }
        Err(err) => {
            error!(
                "event=db_schema module=db status=error duration_ms={} error_code=db_schema_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn bootstrap_schema(path: &Path) -> DbResult<()> {
    let mut conn = Connection::open(path)?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    apply_schema(&mut conn)
}

/// Opens `path` with `SQLITE_OPEN_READ_ONLY`.
///
/// Write statements prepared on the returned connection fail with
/// `SQLITE_READONLY` when stepped.
pub fn open_read_only(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;

    match Connection::open_with_flags(path, flags) {
        Ok(conn) => {
            debug!(
                "event=db_open module=db status=ok mode=read_only path={}",
                path.display()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=read_only error_code=db_open_failed error={}",
                err
            );
            Err(err.into())
        }
    }
}
