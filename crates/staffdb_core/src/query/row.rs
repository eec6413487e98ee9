//! Ordered result row returned by the ad-hoc executor.

use rusqlite::types::Value;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// One result row: column names paired with values in engine column order.
///
/// Duplicate column names (e.g. `SELECT 1 AS a, 2 AS a`) are kept as
/// separate entries. Lookups and serialized maps resolve a duplicated name to
/// its last value, placed at the position of its first occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRow {
    columns: Vec<(String, Value)>,
}

impl QueryRow {
    pub(crate) fn new(columns: Vec<(String, Value)>) -> Self {
        Self { columns }
    }

    /// Returns the value of the last column named `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns
            .iter()
            .rev()
            .find(|(column, _)| column == name)
            .map(|(_, value)| value)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(column, _)| column.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns
            .iter()
            .map(|(column, value)| (column.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Serializes as a map with unique keys, keeping first-occurrence column order.
impl Serialize for QueryRow {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        for (index, (column, _)) in self.columns.iter().enumerate() {
            if self.columns[..index].iter().any(|(seen, _)| seen == column) {
                continue;
            }
            if let Some(value) = self.get(column) {
                map.serialize_entry(column, &SqlValue(value))?;
            }
        }
        map.end()
    }
}

struct SqlValue<'a>(&'a Value);

impl Serialize for SqlValue<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Value::Null => serializer.serialize_none(),
            Value::Integer(value) => serializer.serialize_i64(*value),
            Value::Real(value) => serializer.serialize_f64(*value),
            Value::Text(value) => serializer.serialize_str(value),
            Value::Blob(value) => serializer.serialize_bytes(value),
        }
    }
}
