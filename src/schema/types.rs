//! Type definitions for parsed table schemas and generated statements

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Represents one parsed CREATE TABLE statement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSchema {
    /// Table name, or "unknown" when the statement carries none
    pub table_name: String,
    /// Column name -> verbatim definition text, in source order
    pub columns: IndexMap<String, String>,
    /// Table-level constraint clauses, verbatim, in source order
    pub constraints: Vec<String>,
}

impl TableSchema {
    /// Create a new empty schema with the given table name
    pub fn new(table_name: &str) -> Self {
        Self {
            table_name: table_name.to_string(),
            columns: IndexMap::new(),
            constraints: Vec::new(),
        }
    }

    /// Add a column to the schema
    pub fn add_column(&mut self, name: &str, definition: &str) {
        self.columns.insert(name.to_string(), definition.to_string());
    }

    /// Add a table-level constraint clause to the schema
    pub fn add_constraint(&mut self, clause: &str) {
        self.constraints.push(clause.to_string());
    }
}

/// Kind of column-level change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlterKind {
    Add,
    Modify,
    Drop,
}

/// One generated ALTER TABLE statement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlterStatement {
    pub kind: AlterKind,
    pub column: String,
    /// New column definition; absent for DROP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    /// The fully formed, ready-to-apply statement text
    pub statement: String,
}
