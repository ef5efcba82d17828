//! Schema difference calculator
//!
//! This module compares two parsed table schemas and calculates the
//! column-level ALTER TABLE statements needed to turn the old structure
//! into the new one.

use crate::error::{Error, Result};
use crate::schema::types::{AlterKind, AlterStatement, TableSchema};

/// Represents the changes needed to synchronize two table schemas
#[derive(Debug, Clone)]
pub struct SchemaDiff {
    pub statements: Vec<AlterStatement>,
}

impl SchemaDiff {
    /// Generate a schema diff between two parsed tables.
    ///
    /// Statement order is a contract: ADD and MODIFY statements come first,
    /// in the new schema's column order, followed by DROP statements in the
    /// old schema's column order.
    pub fn generate(old_schema: &TableSchema, new_schema: &TableSchema) -> Result<Self> {
        if old_schema.table_name != new_schema.table_name {
            return Err(Error::SchemaMismatch {
                old: old_schema.table_name.clone(),
                new: new_schema.table_name.clone(),
            });
        }

        let table_name = &old_schema.table_name;
        let mut statements = Vec::new();

        // Modified and new columns, in new-schema order
        for (column_name, new_def) in &new_schema.columns {
            match old_schema.columns.get(column_name) {
                Some(old_def) => {
                    // Exact string comparison; whitespace was already
                    // normalized at parse time
                    if old_def != new_def {
                        statements.push(AlterStatement {
                            kind: AlterKind::Modify,
                            column: column_name.clone(),
                            definition: Some(new_def.clone()),
                            statement: format!(
                                "ALTER TABLE `{}` MODIFY COLUMN `{}` {};",
                                table_name, column_name, new_def
                            ),
                        });
                    }
                }
                None => {
                    statements.push(AlterStatement {
                        kind: AlterKind::Add,
                        column: column_name.clone(),
                        definition: Some(new_def.clone()),
                        statement: format!(
                            "ALTER TABLE `{}` ADD COLUMN `{}` {};",
                            table_name, column_name, new_def
                        ),
                    });
                }
            }
        }

        // Dropped columns, in old-schema order
        for column_name in old_schema.columns.keys() {
            if !new_schema.columns.contains_key(column_name) {
                statements.push(AlterStatement {
                    kind: AlterKind::Drop,
                    column: column_name.clone(),
                    definition: None,
                    statement: format!(
                        "ALTER TABLE `{}` DROP COLUMN `{}`;",
                        table_name, column_name
                    ),
                });
            }
        }

        tracing::debug!(
            table = %table_name,
            statement_count = statements.len(),
            "schema diff generated"
        );

        Ok(Self { statements })
    }

    /// Check if the diff is empty (no changes needed)
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
