//! altergen: generates column-level ALTER TABLE statements by comparing two
//! CREATE TABLE scripts
//!
//! altergen parses an "old" and a "new" table definition into structured
//! schemas, computes the column additions, modifications and drops between
//! them, and renders a ready-to-apply statement block plus a one-line change
//! summary. It never connects to a database; both inputs are plain text.

pub mod config;
pub mod error;
pub mod schema;
pub mod utils;

// Re-export main types for easier access
pub use config::Config;
pub use error::{Error, Result};
pub use schema::diff::SchemaDiff;
pub use schema::parser::parse_create_table;
pub use schema::types::{AlterKind, AlterStatement, TableSchema};

/// The outcome of comparing two table definitions
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Generated statements in application order
    pub statements: Vec<AlterStatement>,
    /// Rendered statement block, blank-line separated
    pub formatted: String,
    /// One-line human-readable change summary
    pub summary: String,
}

impl Comparison {
    /// Check whether the comparison found any changes
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// Complete workflow: parse both definitions, diff them, and render the
/// output.
///
/// Blank input on either side fails with [`Error::EmptyInput`]; differing
/// table names fail with [`Error::SchemaMismatch`]. Malformed SQL never
/// fails, it degrades to a best-effort parse.
pub fn compare_tables(old_sql: &str, new_sql: &str) -> Result<Comparison> {
    if old_sql.trim().is_empty() || new_sql.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    let old_schema = parse_create_table(old_sql);
    let new_schema = parse_create_table(new_sql);
    tracing::debug!(
        table = %old_schema.table_name,
        old_columns = old_schema.columns.len(),
        new_columns = new_schema.columns.len(),
        "parsed table definitions"
    );

    let diff = SchemaDiff::generate(&old_schema, &new_schema)?;
    let formatted = schema::generator::format_statements(&diff.statements);
    let summary = schema::generator::changes_summary(&diff.statements);

    Ok(Comparison {
        statements: diff.statements,
        formatted,
        summary,
    })
}
