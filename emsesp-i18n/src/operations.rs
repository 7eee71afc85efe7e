//! Table comparisons reusable by the CLI and library users.

use serde::Serialize;

use crate::types::{EntryStatus, LocaleTable, Message};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffChangedItem {
    pub key: String,
    pub source: Message,
    pub target: Message,
}

/// A key whose translation status flipped while its value stayed the same.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffStatusItem {
    pub key: String,
    pub source: EntryStatus,
    pub target: EntryStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
    pub status_changed: usize,
    pub unchanged: usize,
}

/// Differences from `source` to `target`.
///
/// `added` keys exist only in `target`, `removed` keys only in `source`.
/// Keys are listed in the order of the table they come from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DiffReport {
    pub source_language: String,
    pub target_language: String,
    pub summary: DiffSummary,
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub changed: Vec<DiffChangedItem>,
    pub status_changed: Vec<DiffStatusItem>,
}

impl DiffReport {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
            && self.removed.is_empty()
            && self.changed.is_empty()
            && self.status_changed.is_empty()
    }
}

/// Produces an added/removed/changed diff between two tables.
pub fn diff_tables(source: &LocaleTable, target: &LocaleTable) -> DiffReport {
    let mut report = DiffReport {
        source_language: source.language().to_string(),
        target_language: target.language().to_string(),
        ..DiffReport::default()
    };

    for source_entry in source.entries() {
        let Some(target_entry) = target.entry(&source_entry.key) else {
            report.removed.push(source_entry.key.clone());
            continue;
        };

        if source_entry.value != target_entry.value {
            report.changed.push(DiffChangedItem {
                key: source_entry.key.clone(),
                source: source_entry.value.clone(),
                target: target_entry.value.clone(),
            });
        } else if source_entry.status != target_entry.status {
            report.status_changed.push(DiffStatusItem {
                key: source_entry.key.clone(),
                source: source_entry.status,
                target: target_entry.status,
            });
        } else {
            report.summary.unchanged += 1;
        }
    }

    report.added = target
        .keys()
        .filter(|key| !source.contains(key))
        .map(str::to_string)
        .collect();

    report.summary.added = report.added.len();
    report.summary.removed = report.removed.len();
    report.summary.changed = report.changed.len();
    report.summary.status_changed = report.status_changed.len();
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_counts() {
        let source = LocaleTable::builder("it")
            .text("SAME", "A")
            .text("REMOVED", "C")
            .text("CHANGED", "old")
            .pending("CERT", "TLS")
            .build()
            .unwrap();
        let target = LocaleTable::builder("it")
            .text("SAME", "A")
            .text("CHANGED", "new")
            .text("CERT", "TLS")
            .text("ADDED", "B")
            .build()
            .unwrap();

        let report = diff_tables(&source, &target);
        assert_eq!(report.added, vec!["ADDED"]);
        assert_eq!(report.removed, vec!["REMOVED"]);
        assert_eq!(report.changed[0].key, "CHANGED");
        assert_eq!(report.status_changed[0].target, EntryStatus::Translated);
        assert_eq!(
            report.summary,
            DiffSummary {
                added: 1,
                removed: 1,
                changed: 1,
                status_changed: 1,
                unchanged: 1,
            }
        );
        assert!(!report.is_empty());
    }

    #[test]
    fn test_identical_tables() {
        let table = crate::locales::italian();
        let report = diff_tables(table, table);
        assert!(report.is_empty());
        assert_eq!(report.summary.unchanged, table.len());
    }

    #[test]
    fn test_report_serialization() {
        let source = LocaleTable::builder("it").list("L", ["a"]).build().unwrap();
        let target = LocaleTable::builder("it").list("L", ["b"]).build().unwrap();
        let json = serde_json::to_string(&diff_tables(&source, &target)).unwrap();
        assert!(json.contains(r#""changed":[{"key":"L","source":["a"],"target":["b"]}]"#));
    }
}
