//! External settings for the ad-hoc query surface.
//!
//! # Responsibility
//! - Resolve the storage path from the environment.
//!
//! # Invariants
//! - A missing or blank setting is an error for the query executor only;
//!   the CRUD path takes its database path from the caller.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Environment variable naming the SQLite file the query executor reads.
pub const DB_PATH_ENV: &str = "SQLITE_DB_PATH";

/// Default store file used by the CLI when no path is given.
pub const DEFAULT_DB_FILE: &str = "employees.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingSetting(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSetting(name) => write!(
                f,
                "{name} environment variable is not set; point it to your .db file"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Resolves the store path through `lookup`, treating blank values as unset.
pub fn lookup_db_path<F>(lookup: F) -> Result<PathBuf, ConfigError>
where
    F: FnOnce(&str) -> Option<String>,
{
    match lookup(DB_PATH_ENV) {
        Some(value) if !value.trim().is_empty() => Ok(PathBuf::from(value.trim())),
        _ => Err(ConfigError::MissingSetting(DB_PATH_ENV)),
    }
}

/// Resolves the store path from the process environment.
pub fn db_path_from_env() -> Result<PathBuf, ConfigError> {
    lookup_db_path(|name| std::env::var(name).ok())
}

#[cfg(test)]
mod tests {
    use super::{lookup_db_path, ConfigError, DB_PATH_ENV};
    use std::path::PathBuf;

    #[test]
    fn lookup_returns_configured_path() {
        let path = lookup_db_path(|_| Some("/var/lib/staff/employees.db".to_string())).unwrap();
        assert_eq!(path, PathBuf::from("/var/lib/staff/employees.db"));
    }

    #[test]
    fn lookup_rejects_missing_and_blank_values() {
        assert_eq!(
            lookup_db_path(|_| None),
            Err(ConfigError::MissingSetting(DB_PATH_ENV))
        );
        assert_eq!(
            lookup_db_path(|_| Some("   ".to_string())),
            Err(ConfigError::MissingSetting(DB_PATH_ENV))
        );
    }
}
