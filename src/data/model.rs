use std::collections::HashSet;

use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Record – one row of the remote response
// ---------------------------------------------------------------------------

/// A single row: field name → JSON value.
///
/// Field order follows the response body. Values are kept as raw JSON so
/// nested objects and arrays survive untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Record { fields }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Fields in response order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

/// Render a cell the way the table shows it.
///
/// Strings are unquoted, a missing field or `null` is blank, and nested
/// values fall back to compact JSON.
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Dataset – everything one fetch returned
// ---------------------------------------------------------------------------

/// An ordered set of records with the union of their columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// All records (rows), in response order.
    pub records: Vec<Record>,
    /// Column names in first-seen order across all records.
    pub column_names: Vec<String>,
}

impl Dataset {
    /// Build the column index from the records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut seen: HashSet<String> = HashSet::new();
        let mut column_names = Vec::new();
        for record in &records {
            for (name, _) in record.iter() {
                if seen.insert(name.clone()) {
                    column_names.push(name.clone());
                }
            }
        }
        Dataset {
            records,
            column_names,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Display text of one cell; blank when the row lacks the column.
    pub fn cell(&self, row: usize, column: &str) -> String {
        cell_text(self.records.get(row).and_then(|r| r.get(column)))
    }
}
