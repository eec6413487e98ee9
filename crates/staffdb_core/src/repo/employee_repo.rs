//! Employee repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD and name search over the `employees` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `update` replaces every mutable column; there is no partial patch.
//! - `delete` is a hard delete.
//! - List and search results are ordered by `name ASC, id ASC` using the
//!   engine's default BINARY collation.
//! - `search_by_name` passes `%` and `_` through to `LIKE` unescaped, so they
//!   act as wildcards inside the pattern.

use crate::db::Database;
use crate::model::employee::{Employee, EmployeeFields, EmployeeId};
use crate::repo::{RepoError, RepoResult};
use log::debug;
use rusqlite::{params, Row};

const EMPLOYEE_SELECT_SQL: &str = "SELECT
    id,
    name,
    department_id,
    salary,
    hire_date
FROM employees";

/// Repository interface for employee CRUD operations.
pub trait EmployeeRepository {
    /// Inserts a new row and returns the storage-assigned id.
    fn create(&self, fields: &EmployeeFields) -> RepoResult<EmployeeId>;
    /// Point lookup by id.
    fn get(&self, id: EmployeeId) -> RepoResult<Option<Employee>>;
    /// Returns every row ordered by name.
    fn list(&self) -> RepoResult<Vec<Employee>>;
    /// Replaces the row with `employee.id`; `false` when no row matched.
    fn update(&self, employee: &Employee) -> RepoResult<bool>;
    /// Removes the row with `id`; `false` when no row matched.
    fn delete(&self, id: EmployeeId) -> RepoResult<bool>;
    /// Case-insensitive "contains" match on `name`, ordered by name.
    fn search_by_name(&self, pattern: &str) -> RepoResult<Vec<Employee>>;
    /// Number of rows in the table.
    fn count(&self) -> RepoResult<u64>;
}

/// SQLite-backed employee repository.
#[derive(Debug, Clone)]
pub struct SqliteEmployeeRepository {
    db: Database,
}

impl SqliteEmployeeRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl EmployeeRepository for SqliteEmployeeRepository {
    fn create(&self, fields: &EmployeeFields) -> RepoResult<EmployeeId> {
        let conn = self.db.connect()?;
        conn.execute(
            "INSERT INTO employees (
                name,
                department_id,
                salary,
                hire_date
            ) VALUES (?1, ?2, ?3, ?4);",
            params![
                fields.name.as_str(),
                fields.department_id,
                fields.salary,
                fields.hire_date.as_deref(),
            ],
        )?;

        let id = conn.last_insert_rowid();
        debug!("event=employee_write module=repo status=ok op=create id={id}");
        Ok(id)
    }

    fn get(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(&format!("{EMPLOYEE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_employee_row(row)?));
        }

        Ok(None)
    }

    fn list(&self) -> RepoResult<Vec<Employee>> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(&format!("{EMPLOYEE_SELECT_SQL} ORDER BY name ASC, id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut employees = Vec::new();
        while let Some(row) = rows.next()? {
            employees.push(parse_employee_row(row)?);
        }

        Ok(employees)
    }

    fn update(&self, employee: &Employee) -> RepoResult<bool> {
        let conn = self.db.connect()?;
        let changed = conn.execute(
            "UPDATE employees
             SET
                name = ?1,
                department_id = ?2,
                salary = ?3,
                hire_date = ?4
             WHERE id = ?5;",
            params![
                employee.name.as_str(),
                employee.department_id,
                employee.salary,
                employee.hire_date.as_deref(),
                employee.id,
            ],
        )?;

        debug!(
            "event=employee_write module=repo status=ok op=update id={} changed={changed}",
            employee.id
        );
        Ok(changed == 1)
    }

    fn delete(&self, id: EmployeeId) -> RepoResult<bool> {
        let conn = self.db.connect()?;
        let changed = conn.execute("DELETE FROM employees WHERE id = ?1;", params![id])?;

        debug!("event=employee_write module=repo status=ok op=delete id={id} changed={changed}");
        Ok(changed > 0)
    }

    fn search_by_name(&self, pattern: &str) -> RepoResult<Vec<Employee>> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(&format!(
            "{EMPLOYEE_SELECT_SQL}
             WHERE name LIKE '%' || ?1 || '%'
             ORDER BY name ASC, id ASC;"
        ))?;

        let mut rows = stmt.query(params![pattern])?;
        let mut employees = Vec::new();
        while let Some(row) = rows.next()? {
            employees.push(parse_employee_row(row)?);
        }

        Ok(employees)
    }

    fn count(&self) -> RepoResult<u64> {
        let conn = self.db.connect()?;
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM employees;", [], |row| row.get(0))?;

        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative employee count `{count}`")))
    }
}

fn parse_employee_row(row: &Row<'_>) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get("id")?,
        name: row.get("name")?,
        department_id: row.get("department_id")?,
        salary: row.get("salary")?,
        hire_date: row.get("hire_date")?,
    })
}

#[cfg(test)]
mod tests {
    use super::{EmployeeRepository, SqliteEmployeeRepository};
    use crate::db::ensure_schema;
    use crate::model::employee::EmployeeFields;

    #[test]
    fn search_treats_wildcards_in_pattern_as_like_metacharacters() {
        let dir = tempfile::tempdir().unwrap();
        let repo = SqliteEmployeeRepository::new(ensure_schema(dir.path().join("s.db")).unwrap());
        repo.create(&EmployeeFields::new("Ada")).unwrap();
        repo.create(&EmployeeFields::new("Bob")).unwrap();

        // `%` is not escaped, so it matches every name.
        let all = repo.search_by_name("%").unwrap();
        assert_eq!(all.len(), 2);

        // `_` matches any single character.
        let single = repo.search_by_name("A_a").unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].name, "Ada");
    }
}
