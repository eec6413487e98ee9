//! Employee domain model.
//!
//! # Responsibility
//! - Describe one employee row and the caller-supplied field set used to
//!   create or fully replace it.
//!
//! # Invariants
//! - `EmployeeFields` is always complete; updates replace every column.
//! - `salary` and `hire_date` are stored as given. Sign and date format
//!   checks belong to the caller.

use crate::model::department::DepartmentId;
use serde::{Deserialize, Serialize};

/// Storage-assigned employee identifier.
pub type EmployeeId = i64;

/// Mutable columns of an employee row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeFields {
    pub name: String,
    /// Must reference an existing department when set.
    pub department_id: Option<DepartmentId>,
    pub salary: Option<f64>,
    /// `YYYY-MM-DD`, unvalidated.
    pub hire_date: Option<String>,
}

impl EmployeeFields {
    /// Creates a field set with only `name` populated.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            department_id: None,
            salary: None,
            hire_date: None,
        }
    }

    pub fn with_department(mut self, department_id: DepartmentId) -> Self {
        self.department_id = Some(department_id);
        self
    }

    pub fn with_salary(mut self, salary: f64) -> Self {
        self.salary = Some(salary);
        self
    }

    pub fn with_hire_date(mut self, hire_date: impl Into<String>) -> Self {
        self.hire_date = Some(hire_date.into());
        self
    }
}

/// Snapshot of one persisted employee row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub department_id: Option<DepartmentId>,
    pub salary: Option<f64>,
    pub hire_date: Option<String>,
}

impl Employee {
    /// Combines a storage id with a full field set.
    pub fn from_fields(id: EmployeeId, fields: EmployeeFields) -> Self {
        Self {
            id,
            name: fields.name,
            department_id: fields.department_id,
            salary: fields.salary,
            hire_date: fields.hire_date,
        }
    }

    /// Returns the mutable columns, dropping the id.
    pub fn fields(&self) -> EmployeeFields {
        EmployeeFields {
            name: self.name.clone(),
            department_id: self.department_id,
            salary: self.salary,
            hire_date: self.hire_date.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Employee, EmployeeFields};

    #[test]
    fn builder_sets_optional_columns() {
        let fields = EmployeeFields::new("Ada")
            .with_department(1)
            .with_salary(9000.0)
            .with_hire_date("2020-01-01");

        assert_eq!(fields.name, "Ada");
        assert_eq!(fields.department_id, Some(1));
        assert_eq!(fields.salary, Some(9000.0));
        assert_eq!(fields.hire_date.as_deref(), Some("2020-01-01"));
    }

    #[test]
    fn from_fields_and_fields_are_inverse() {
        let fields = EmployeeFields::new("Grace").with_salary(1.5);
        let employee = Employee::from_fields(7, fields.clone());

        assert_eq!(employee.id, 7);
        assert_eq!(employee.fields(), fields);
    }

    #[test]
    fn serializes_with_snake_case_keys() {
        let employee = Employee::from_fields(3, EmployeeFields::new("Linus").with_department(2));
        let value = serde_json::to_value(&employee).unwrap();

        assert_eq!(value["id"], 3);
        assert_eq!(value["department_id"], 2);
        assert!(value["salary"].is_null());
    }
}
