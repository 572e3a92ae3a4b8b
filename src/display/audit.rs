//! Audit history display

use crate::audit::AuditEntry;

/// Format audit entries oldest first, one block per entry
pub fn format_audit_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No history recorded.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::EntityType;
    use serde_json::json;

    #[test]
    fn test_history() {
        assert_eq!(format_audit_history(&[]), "No history recorded.\n");

        let entries = vec![
            AuditEntry::create(EntityType::Expense, "Groceries", &json!({"amount": 1000})),
            AuditEntry::create(EntityType::Budget, "Travel", &json!({"amount": 0})),
        ];
        let output = format_audit_history(&entries);
        assert!(output.contains("CREATE Expense Groceries"));
        assert!(output.contains("CREATE Budget Travel"));
    }
}
