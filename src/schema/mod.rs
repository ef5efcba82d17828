//! Schema module for altergen
//!
//! This module handles CREATE TABLE parsing, comparison, and statement
//! generation.

pub mod diff;
pub mod generator;
pub mod parser;
pub mod types;

// Re-export key types
pub use diff::SchemaDiff;
pub use generator::{changes_summary, format_statements};
pub use parser::parse_create_table;
pub use types::{AlterKind, AlterStatement, TableSchema};
