//! Data-access and query layer for the StaffDB employee manager.
//! This crate is the single source of truth for persistence and
//! cross-entity invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;

pub use config::{db_path_from_env, ConfigError, DB_PATH_ENV, DEFAULT_DB_FILE};
pub use db::{ensure_schema, Database, DbError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::department::{Department, DepartmentId};
pub use model::employee::{Employee, EmployeeFields, EmployeeId};
pub use query::{QueryError, QueryResult, QueryRow, ReadOnlyQueryExecutor};
pub use repo::department_repo::{DepartmentRepository, SqliteDepartmentRepository};
pub use repo::employee_repo::{EmployeeRepository, SqliteEmployeeRepository};
pub use repo::{RepoError, RepoResult};
pub use service::employee_service::{
    EmployeeService, ErrorKind, ServiceError, ServiceResult, ValidationError,
};

/// Service wired to the SQLite repositories of one store.
pub type SqliteEmployeeService =
    EmployeeService<SqliteEmployeeRepository, SqliteDepartmentRepository>;

/// Builds the default service stack over an initialized store.
pub fn sqlite_service(db: &Database) -> SqliteEmployeeService {
    EmployeeService::new(
        SqliteEmployeeRepository::new(db.clone()),
        SqliteDepartmentRepository::new(db.clone()),
    )
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
