//! Table definitions for the employee store.
//!
//! # Responsibility
//! - Declare the `departments` and `employees` tables.
//! - Create missing tables atomically.
//!
//! # Invariants
//! - Every statement is `CREATE TABLE IF NOT EXISTS`, so re-applying is a no-op.
//! - An existing table with a different shape is left untouched.

use crate::db::DbResult;
use rusqlite::Connection;

/// Table names owned by this schema, in creation order.
pub const TABLES: &[&str] = &["departments", "employees"];

const SCHEMA_STATEMENTS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS departments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL
    );",
    "CREATE TABLE IF NOT EXISTS employees (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        department_id INTEGER REFERENCES departments(id),
        salary REAL,
        hire_date TEXT
    );",
];

/// Creates any missing schema tables on the provided connection.
pub fn apply_schema(conn: &mut Connection) -> DbResult<()> {
    let tx = conn.transaction()?;
    for statement in SCHEMA_STATEMENTS {
        tx.execute_batch(statement)?;
    }
    tx.commit()?;

    Ok(())
}

/// Lists user tables in name order, skipping SQLite internal tables.
pub fn table_names(conn: &Connection) -> DbResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT name
         FROM sqlite_master
         WHERE type = 'table'
           AND name NOT LIKE 'sqlite_%'
         ORDER BY name ASC;",
    )?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(names)
}
