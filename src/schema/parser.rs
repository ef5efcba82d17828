//! CREATE TABLE parser
//!
//! This module turns one raw CREATE TABLE statement into a structured
//! [`TableSchema`]. Parsing is best-effort and never fails: a missing table
//! name becomes "unknown" and a missing column list yields an empty schema.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::schema::types::TableSchema;

static TABLE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)CREATE\s+TABLE\s+`?(\w+)`?\s*\(").unwrap());

static COLUMN_DEF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^`?(\w+)`?\s+(.+)$").unwrap());

/// Clause prefixes that mark a table-level constraint rather than a column.
/// Checked before the column pattern, so `KEY idx_name (col)` is never
/// mistaken for a column named `KEY`.
const CONSTRAINT_KEYWORDS: [&str; 6] = [
    "PRIMARY KEY",
    "UNIQUE",
    "KEY",
    "INDEX",
    "FOREIGN KEY",
    "CONSTRAINT",
];

/// Parse a CREATE TABLE statement into a structured schema
pub fn parse_create_table(sql: &str) -> TableSchema {
    // Collapse all whitespace runs so the rest of the parse is
    // layout-independent
    let sql = normalize_whitespace(sql);

    let (table_name, search_from) = match TABLE_NAME_RE.captures(&sql) {
        Some(caps) => {
            let name = caps.get(1).map(|m| m.as_str()).unwrap_or("unknown");
            (name.to_string(), caps.get(0).map(|m| m.end() - 1).unwrap_or(0))
        }
        None => ("unknown".to_string(), 0),
    };

    let mut schema = TableSchema::new(&table_name);

    let body = match extract_body(&sql, search_from) {
        Some(body) => body,
        None => {
            tracing::debug!(table = %schema.table_name, "no column list found in statement");
            return schema;
        }
    };

    for clause in split_top_level(body) {
        let clause = clause.trim();
        if clause.is_empty() {
            continue;
        }

        if is_constraint(clause) {
            schema.add_constraint(clause);
        } else if let Some(caps) = COLUMN_DEF_RE.captures(clause) {
            schema.add_column(&caps[1], &caps[2]);
        } else {
            // Lenient parse: clauses that are neither constraint nor column
            // shaped are dropped rather than reported
            tracing::debug!(clause, "skipping unparsable clause");
        }
    }

    schema
}

fn normalize_whitespace(sql: &str) -> String {
    sql.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Locate the span between the column list's opening paren and the last
/// closing paren in the statement. `from` points at the opening paren when
/// the table-name pattern matched, otherwise the first paren is searched
/// from the start of the string.
fn extract_body(sql: &str, from: usize) -> Option<&str> {
    let open = sql[from..].find('(')? + from;
    let close = sql.rfind(')')?;
    if close <= open {
        return None;
    }
    Some(&sql[open + 1..close])
}

/// Split the column list into top-level clauses. Commas nested inside
/// parentheses, e.g. `DECIMAL(10,2)`, do not separate clauses.
fn split_top_level(body: &str) -> Vec<String> {
    let mut clauses = Vec::new();
    let mut current = String::new();
    let mut depth: i32 = 0;

    for ch in body.chars() {
        match ch {
            '(' => {
                depth += 1;
                current.push(ch);
            }
            ')' => {
                depth -= 1;
                current.push(ch);
            }
            ',' if depth == 0 => {
                clauses.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    clauses.push(current.trim().to_string());
    clauses
}

fn is_constraint(clause: &str) -> bool {
    let upper = clause.to_uppercase();
    CONSTRAINT_KEYWORDS
        .iter()
        .any(|keyword| upper.starts_with(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_table_name_and_columns() {
        let schema = parse_create_table(
            "CREATE TABLE `users` (\n  `id` INT PRIMARY KEY,\n  `name` VARCHAR(50)\n);",
        );

        assert_eq!(schema.table_name, "users");
        assert_eq!(schema.columns.len(), 2);
        assert_eq!(schema.columns["id"], "INT PRIMARY KEY");
        assert_eq!(schema.columns["name"], "VARCHAR(50)");
        assert!(schema.constraints.is_empty());
    }

    #[test]
    fn table_name_match_is_case_insensitive() {
        let schema = parse_create_table("create table orders (id INT)");
        assert_eq!(schema.table_name, "orders");
    }

    #[test]
    fn missing_table_name_falls_back_to_unknown() {
        let schema = parse_create_table("(id INT, name VARCHAR(20))");
        assert_eq!(schema.table_name, "unknown");
        assert_eq!(schema.columns.len(), 2);
    }

    #[test]
    fn missing_body_yields_empty_schema() {
        let schema = parse_create_table("CREATE TABLE users");
        assert_eq!(schema.table_name, "unknown");
        assert!(schema.columns.is_empty());
        assert!(schema.constraints.is_empty());
    }

    #[test]
    fn nested_parens_do_not_split_a_clause() {
        let schema =
            parse_create_table("CREATE TABLE products (price DECIMAL(10,2) NOT NULL, qty INT)");
        assert_eq!(schema.columns["price"], "DECIMAL(10,2) NOT NULL");
        assert_eq!(schema.columns["qty"], "INT");
    }

    #[test]
    fn constraint_clauses_are_kept_separately() {
        let schema = parse_create_table(
            "CREATE TABLE t (id INT, name VARCHAR(30), PRIMARY KEY (id), KEY idx_name (name))",
        );

        assert_eq!(schema.columns.len(), 2);
        assert_eq!(
            schema.constraints,
            vec!["PRIMARY KEY (id)".to_string(), "KEY idx_name (name)".to_string()]
        );
        assert!(!schema.columns.contains_key("PRIMARY"));
        assert!(!schema.columns.contains_key("KEY"));
    }

    #[test]
    fn unparsable_clauses_are_dropped() {
        let schema = parse_create_table("CREATE TABLE t (id INT, ???, name TEXT)");
        assert_eq!(schema.columns.len(), 2);
        assert!(schema.constraints.is_empty());
    }

    #[test]
    fn whitespace_and_newlines_are_normalized() {
        let schema = parse_create_table(
            "CREATE   TABLE\n\tusers\n(\n  id    INT\n      NOT NULL\n)",
        );
        assert_eq!(schema.table_name, "users");
        assert_eq!(schema.columns["id"], "INT NOT NULL");
    }

    #[test]
    fn column_order_follows_source_order() {
        let schema = parse_create_table("CREATE TABLE t (c INT, a INT, b INT)");
        let names: Vec<&String> = schema.columns.keys().collect();
        assert_eq!(names, ["c", "a", "b"]);
    }
}
