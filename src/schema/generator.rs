//! Statement output formatting
//!
//! This module renders a list of generated ALTER TABLE statements into the
//! user-facing statement block and a one-line change summary.

use crate::schema::types::{AlterKind, AlterStatement};

/// Render the statement block: one statement per line, separated by blank
/// lines. An empty list renders as a two-line "no changes" comment.
pub fn format_statements(statements: &[AlterStatement]) -> String {
    if statements.is_empty() {
        return "-- No changes detected\n-- Both tables have identical structure".to_string();
    }

    statements
        .iter()
        .map(|stmt| stmt.statement.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Build the one-line human-readable summary of the generated changes
pub fn changes_summary(statements: &[AlterStatement]) -> String {
    if statements.is_empty() {
        return "Analysis complete! No changes found between the two schemas.".to_string();
    }

    let add_count = statements.iter().filter(|s| s.kind == AlterKind::Add).count();
    let modify_count = statements.iter().filter(|s| s.kind == AlterKind::Modify).count();
    let drop_count = statements.iter().filter(|s| s.kind == AlterKind::Drop).count();

    let mut parts = Vec::new();
    if add_count > 0 {
        parts.push(format!("{} column{} added", add_count, plural(add_count)));
    }
    if modify_count > 0 {
        parts.push(format!("{} column{} modified", modify_count, plural(modify_count)));
    }
    if drop_count > 0 {
        parts.push(format!("{} column{} dropped", drop_count, plural(drop_count)));
    }

    format!(
        "Successfully generated {} ALTER TABLE statement{}! ({})",
        statements.len(),
        plural(statements.len()),
        parts.join(", ")
    )
}

fn plural(count: usize) -> &'static str {
    if count > 1 {
        "s"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn stmt(kind: AlterKind, column: &str) -> AlterStatement {
        let statement = match kind {
            AlterKind::Add => format!("ALTER TABLE `t` ADD COLUMN `{}` INT;", column),
            AlterKind::Modify => format!("ALTER TABLE `t` MODIFY COLUMN `{}` INT;", column),
            AlterKind::Drop => format!("ALTER TABLE `t` DROP COLUMN `{}`;", column),
        };
        AlterStatement {
            kind,
            column: column.to_string(),
            definition: matches!(kind, AlterKind::Add | AlterKind::Modify)
                .then(|| "INT".to_string()),
            statement,
        }
    }

    #[test]
    fn empty_list_renders_no_changes_comment() {
        assert_eq!(
            format_statements(&[]),
            "-- No changes detected\n-- Both tables have identical structure"
        );
        assert_eq!(
            changes_summary(&[]),
            "Analysis complete! No changes found between the two schemas."
        );
    }

    #[test]
    fn statements_are_separated_by_blank_lines() {
        let statements = vec![stmt(AlterKind::Modify, "name"), stmt(AlterKind::Add, "email")];
        assert_eq!(
            format_statements(&statements),
            "ALTER TABLE `t` MODIFY COLUMN `name` INT;\n\n\
             ALTER TABLE `t` ADD COLUMN `email` INT;"
        );
    }

    #[test]
    fn summary_counts_each_category() {
        let statements = vec![
            stmt(AlterKind::Add, "a"),
            stmt(AlterKind::Add, "b"),
            stmt(AlterKind::Modify, "c"),
            stmt(AlterKind::Drop, "d"),
        ];
        assert_eq!(
            changes_summary(&statements),
            "Successfully generated 4 ALTER TABLE statements! \
             (2 columns added, 1 column modified, 1 column dropped)"
        );
    }

    #[test]
    fn summary_omits_empty_categories() {
        let statements = vec![stmt(AlterKind::Drop, "a")];
        assert_eq!(
            changes_summary(&statements),
            "Successfully generated 1 ALTER TABLE statement! (1 column dropped)"
        );
    }
}
