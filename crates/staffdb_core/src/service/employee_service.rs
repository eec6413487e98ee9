//! Employee use-case service.
//!
//! # Responsibility
//! - Check that a referenced department exists before any employee write.
//! - Turn "no row affected" into a typed not-found failure.
//! - Expose read paths for employees and departments to presentation code.
//!
//! # Invariants
//! - An employee write never reaches storage with a dangling
//!   `department_id`.
//! - Every failure comes back as a `ServiceError` with a distinguishable
//!   kind; nothing is swallowed and nothing panics.
//! - Updates replace the full row; "keep current value" is resolved by the
//!   caller before it builds `EmployeeFields`.

use crate::model::department::{Department, DepartmentId};
use crate::model::employee::{Employee, EmployeeFields, EmployeeId};
use crate::repo::department_repo::DepartmentRepository;
use crate::repo::employee_repo::EmployeeRepository;
use crate::repo::RepoError;
use log::{error, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Cross-entity rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `department_id` does not resolve to a stored department.
    UnknownDepartment(DepartmentId),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownDepartment(id) => write!(f, "department does not exist: {id}"),
        }
    }
}

impl Error for ValidationError {}

/// Coarse failure category for callers that only need to branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Storage,
}

/// Service error for employee use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Input violated a cross-entity rule; storage was not touched.
    Validation(ValidationError),
    /// Target employee does not exist.
    NotFound(EmployeeId),
    /// Persistence-layer failure.
    Storage(RepoError),
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Storage(_) => ErrorKind::Storage,
        }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "employee not found: {id}"),
            Self::Storage(err) => write!(f, "storage failure: {err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Storage(value)
    }
}

/// Employee service facade over repository implementations.
pub struct EmployeeService<E: EmployeeRepository, D: DepartmentRepository> {
    employees: E,
    departments: D,
}

impl<E: EmployeeRepository, D: DepartmentRepository> EmployeeService<E, D> {
    /// Creates a service over the provided repositories.
    pub fn new(employees: E, departments: D) -> Self {
        Self {
            employees,
            departments,
        }
    }

    /// Creates one employee after checking its department reference.
    ///
    /// # Errors
    /// - `Validation(UnknownDepartment)` when `department_id` is set but
    ///   absent; the employee table is left unchanged.
    /// - `Storage` for any repository failure.
    pub fn create_employee(&self, fields: &EmployeeFields) -> ServiceResult<EmployeeId> {
        let result = self
            .ensure_department(fields.department_id)
            .and_then(|()| self.employees.create(fields).map_err(Into::into));
        report("create", None, result)
    }

    /// Fully replaces employee `id` with `fields`.
    ///
    /// # Errors
    /// - `Validation(UnknownDepartment)` as for [`Self::create_employee`].
    /// - `NotFound(id)` when no row was replaced.
    pub fn update_employee(&self, id: EmployeeId, fields: &EmployeeFields) -> ServiceResult<()> {
        let result = self.ensure_department(fields.department_id).and_then(|()| {
            let employee = Employee::from_fields(id, fields.clone());
            if self.employees.update(&employee)? {
                Ok(())
            } else {
                Err(ServiceError::NotFound(id))
            }
        });
        report("update", Some(id), result)
    }

    /// Hard-deletes employee `id`.
    ///
    /// # Errors
    /// - `NotFound(id)` when nothing was removed.
    pub fn delete_employee(&self, id: EmployeeId) -> ServiceResult<()> {
        let result = match self.employees.delete(id) {
            Ok(true) => Ok(()),
            Ok(false) => Err(ServiceError::NotFound(id)),
            Err(err) => Err(err.into()),
        };
        report("delete", Some(id), result)
    }

    /// Searches employees by name substring; an empty pattern matches all.
    pub fn search_employees(&self, pattern: &str) -> ServiceResult<Vec<Employee>> {
        report("search", None, self.employees.search_by_name(pattern).map_err(Into::into))
    }

    /// Gets one employee; `Ok(None)` when absent.
    pub fn get_employee(&self, id: EmployeeId) -> ServiceResult<Option<Employee>> {
        report("get", Some(id), self.employees.get(id).map_err(Into::into))
    }

    /// Lists all employees ordered by name.
    pub fn list_employees(&self) -> ServiceResult<Vec<Employee>> {
        report("list", None, self.employees.list().map_err(Into::into))
    }

    /// Gets one department; `Ok(None)` when absent.
    pub fn get_department(&self, id: DepartmentId) -> ServiceResult<Option<Department>> {
        report("get_department", Some(id), self.departments.get(id).map_err(Into::into))
    }

    /// Lists all departments ordered by name.
    pub fn list_departments(&self) -> ServiceResult<Vec<Department>> {
        report("list_departments", None, self.departments.list().map_err(Into::into))
    }

    fn ensure_department(&self, department_id: Option<DepartmentId>) -> ServiceResult<()> {
        let Some(department_id) = department_id else {
            return Ok(());
        };

        match self.departments.get(department_id)? {
            Some(_) => Ok(()),
            None => Err(ValidationError::UnknownDepartment(department_id).into()),
        }
    }
}

/// Logs a failed outcome; `id` is the employee or department the call targeted.
fn report<T>(op: &str, id: Option<i64>, result: ServiceResult<T>) -> ServiceResult<T> {
    if let Err(err) = &result {
        let id = id.map_or_else(|| "-".to_string(), |id| id.to_string());
        match err.kind() {
            ErrorKind::Validation | ErrorKind::NotFound => warn!(
                "event=employee_service module=service status=rejected op={op} id={id} error={err}"
            ),
            ErrorKind::Storage => error!(
                "event=employee_service module=service status=error op={op} id={id} error={err}"
            ),
        }
    }
    result
}
