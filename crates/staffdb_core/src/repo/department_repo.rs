//! Department repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide read access to the `departments` lookup table.
//!
//! # Invariants
//! - No write path exists; departments are seeded externally.
//! - Lists are ordered by `name ASC, id ASC`.

use crate::db::Database;
use crate::model::department::{Department, DepartmentId};
use crate::repo::RepoResult;
use rusqlite::{params, OptionalExtension, Row};

const DEPARTMENT_SELECT_SQL: &str = "SELECT id, name FROM departments";

/// Read-only repository interface for departments.
pub trait DepartmentRepository {
    fn get(&self, id: DepartmentId) -> RepoResult<Option<Department>>;
    fn list(&self) -> RepoResult<Vec<Department>>;
}

/// SQLite-backed department repository.
#[derive(Debug, Clone)]
pub struct SqliteDepartmentRepository {
    db: Database,
}

impl SqliteDepartmentRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl DepartmentRepository for SqliteDepartmentRepository {
    fn get(&self, id: DepartmentId) -> RepoResult<Option<Department>> {
        let conn = self.db.connect()?;
        let department = conn
            .query_row(
                &format!("{DEPARTMENT_SELECT_SQL} WHERE id = ?1;"),
                params![id],
                parse_department_row,
            )
            .optional()?;

        Ok(department)
    }

    fn list(&self) -> RepoResult<Vec<Department>> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(&format!(
            "{DEPARTMENT_SELECT_SQL} ORDER BY name ASC, id ASC;"
        ))?;
        let departments = stmt
            .query_map([], parse_department_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(departments)
    }
}

fn parse_department_row(row: &Row<'_>) -> rusqlite::Result<Department> {
    Ok(Department {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}
