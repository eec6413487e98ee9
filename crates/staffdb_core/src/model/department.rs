//! Department lookup record.

use serde::{Deserialize, Serialize};

/// Storage-assigned department identifier.
pub type DepartmentId = i64;

/// Row of the `departments` lookup table.
///
/// Departments are seeded outside this crate and only read here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    /// Display name; not required to be unique.
    pub name: String,
}
