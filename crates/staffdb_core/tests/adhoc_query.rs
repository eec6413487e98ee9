use rusqlite::types::Value;
use rusqlite::Connection;
use staffdb_core::{
    ensure_schema, ConfigError, DbError, QueryError, ReadOnlyQueryExecutor, DB_PATH_ENV,
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn seeded_store() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employees.db");
    ensure_schema(&path).unwrap();
    Connection::open(&path)
        .unwrap()
        .execute_batch(
            "INSERT INTO departments (name) VALUES ('Eng');
             INSERT INTO employees (name, department_id, salary, hire_date)
                VALUES ('Zed', 1, 100.5, '2021-02-03');
             INSERT INTO employees (name, department_id, salary, hire_date)
                VALUES ('Ada', 1, NULL, NULL);",
        )
        .unwrap();
    (dir, path)
}

fn employee_rows(path: &Path) -> i64 {
    Connection::open(path)
        .unwrap()
        .query_row("SELECT COUNT(*) FROM employees;", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn select_returns_rows_in_engine_order_with_column_order() {
    let (_dir, path) = seeded_store();
    let executor = ReadOnlyQueryExecutor::new(&path);

    let rows = executor
        .execute_read_only("SELECT salary, name, id FROM employees ORDER BY id;")
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0].column_names().collect::<Vec<_>>(),
        ["salary", "name", "id"]
    );
    assert_eq!(rows[0].get("name"), Some(&Value::Text("Zed".to_string())));
    assert_eq!(rows[0].get("salary"), Some(&Value::Real(100.5)));
    assert_eq!(rows[1].get("salary"), Some(&Value::Null));
    assert_eq!(rows[1].get("id"), Some(&Value::Integer(2)));
}

#[test]
fn rows_serialize_to_json_objects() {
    let (_dir, path) = seeded_store();
    let executor = ReadOnlyQueryExecutor::new(&path);

    let rows = executor
        .execute_read_only("SELECT id, name FROM departments;")
        .unwrap();

    assert_eq!(
        serde_json::to_string(&rows).unwrap(),
        r#"[{"id":1,"name":"Eng"}]"#
    );
}

#[test]
fn write_statements_are_rejected_by_the_engine() {
    let (_dir, path) = seeded_store();
    let executor = ReadOnlyQueryExecutor::new(&path);
    let statements = [
        "INSERT INTO employees (name) VALUES ('Mallory');",
        "UPDATE employees SET salary = 0;",
        "DELETE FROM employees;",
    ];

    for sql in statements {
        let err = executor.execute_read_only(sql).unwrap_err();
        assert!(err.is_read_only_violation(), "{sql} should hit read-only: {err}");
        assert_eq!(employee_rows(&path), 2);
    }
}

#[test]
fn schema_changes_are_rejected() {
    let (_dir, path) = seeded_store();
    let executor = ReadOnlyQueryExecutor::new(&path);

    let err = executor.execute_read_only("DROP TABLE employees;").unwrap_err();
    assert!(matches!(err, QueryError::Execution(_)));
    assert_eq!(employee_rows(&path), 2);
}

#[test]
fn invalid_sql_and_missing_objects_are_execution_errors() {
    let (_dir, path) = seeded_store();
    let executor = ReadOnlyQueryExecutor::new(&path);

    let syntax = executor.execute_read_only("SELEC name FROM employees;").unwrap_err();
    assert!(matches!(syntax, QueryError::Execution(_)));

    let missing = executor.execute_read_only("SELECT * FROM payroll;").unwrap_err();
    assert!(matches!(missing, QueryError::Execution(_)));
    assert!(missing.to_string().contains("payroll"));
}

#[test]
fn blank_statement_is_rejected_before_opening() {
    let executor = ReadOnlyQueryExecutor::new("/nonexistent/never-opened.db");

    let err = executor.execute_read_only("   ").unwrap_err();
    assert!(matches!(err, QueryError::EmptyStatement));
}

#[test]
fn multiple_statements_are_rejected_not_truncated() {
    let (_dir, path) = seeded_store();
    let executor = ReadOnlyQueryExecutor::new(&path);

    let err = executor
        .execute_read_only("SELECT 1; DELETE FROM employees;")
        .unwrap_err();
    assert!(matches!(
        err,
        QueryError::Execution(DbError::Sqlite(rusqlite::Error::MultipleStatement))
    ));
    assert_eq!(employee_rows(&path), 2);

    let err = executor
        .execute_read_only("SELECT name FROM departments; SELECT name FROM employees;")
        .unwrap_err();
    assert!(matches!(err, QueryError::Execution(_)));
}

#[test]
fn trailing_comment_after_single_statement_is_allowed() {
    let (_dir, path) = seeded_store();
    let executor = ReadOnlyQueryExecutor::new(&path);

    let rows = executor
        .execute_read_only("SELECT name FROM departments; -- lookup only")
        .unwrap();
    assert_eq!(rows.len(), 1);
}

#[test]
fn comment_only_text_is_an_empty_statement() {
    let (_dir, path) = seeded_store();
    let executor = ReadOnlyQueryExecutor::new(&path);

    let err = executor.execute_read_only("-- just a comment").unwrap_err();
    assert!(matches!(err, QueryError::EmptyStatement));

    let err = executor.execute_read_only("/* nothing */ ;").unwrap_err();
    assert!(matches!(err, QueryError::EmptyStatement));
}

#[test]
fn duplicate_column_names_collapse_to_last_value_in_json() {
    let (_dir, path) = seeded_store();
    let executor = ReadOnlyQueryExecutor::new(&path);

    let rows = executor.execute_read_only("SELECT 1 AS a, 2 AS b, 3 AS a;").unwrap();
    assert_eq!(rows[0].len(), 3);
    assert_eq!(rows[0].get("a"), Some(&Value::Integer(3)));
    assert_eq!(serde_json::to_string(&rows).unwrap(), r#"[{"a":3,"b":2}]"#);
}

#[test]
fn missing_store_file_is_an_execution_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.db");
    let executor = ReadOnlyQueryExecutor::new(&path);

    let err = executor.execute_read_only("SELECT 1;").unwrap_err();
    assert!(matches!(err, QueryError::Execution(_)));
    assert!(!path.exists());
}

#[test]
fn select_without_rows_returns_empty_list() {
    let (_dir, path) = seeded_store();
    let executor = ReadOnlyQueryExecutor::new(&path);

    let rows = executor
        .execute_read_only("SELECT * FROM employees WHERE id < 0;")
        .unwrap();
    assert!(rows.is_empty());
}

#[test]
fn unset_path_setting_is_a_configuration_error() {
    let err = ReadOnlyQueryExecutor::from_lookup(|_| None).unwrap_err();
    assert!(matches!(
        err,
        QueryError::Configuration(ConfigError::MissingSetting(DB_PATH_ENV))
    ));
}

#[test]
fn configured_path_is_used_verbatim() {
    let (_dir, path) = seeded_store();
    let configured = path.to_str().unwrap().to_string();

    let executor = ReadOnlyQueryExecutor::from_lookup(|name| {
        assert_eq!(name, DB_PATH_ENV);
        Some(configured)
    })
    .unwrap();

    assert_eq!(executor.db_path(), path.as_path());
    assert_eq!(executor.execute_read_only("SELECT name FROM departments;").unwrap().len(), 1);
}
