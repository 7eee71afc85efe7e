use emsesp_i18n::{LocaleTable, Message, Template, plural_rules::collect_table_plural_issues};
use serde_json::json;

#[derive(Debug, Default, PartialEq)]
struct TableStats {
    total: usize,
    texts: usize,
    lists: usize,
    pending: usize,
    with_placeholders: usize,
    with_plurals: usize,
    malformed: usize,
}

impl TableStats {
    fn completion_percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            ((self.total - self.pending) as f64) * 100.0 / (self.total as f64)
        }
    }
}

fn collect(table: &LocaleTable) -> TableStats {
    let mut stats = TableStats::default();
    for entry in table.entries() {
        stats.total += 1;
        if entry.is_pending() {
            stats.pending += 1;
        }
        let text = match &entry.value {
            Message::Text(text) => text,
            Message::List(_) => {
                stats.lists += 1;
                continue;
            }
        };
        stats.texts += 1;
        match Template::parse(text) {
            Ok(template) => {
                if !template.argument_names().is_empty() {
                    stats.with_placeholders += 1;
                }
                if template.plural_blocks().next().is_some() {
                    stats.with_plurals += 1;
                }
            }
            Err(_) => stats.malformed += 1,
        }
    }
    stats
}

pub fn print_stats(table: &LocaleTable, json_output: bool) -> Result<(), String> {
    let stats = collect(table);
    let plural_issues = collect_table_plural_issues(table);
    let missing_plural_categories_total: usize =
        plural_issues.iter().map(|r| r.missing.len()).sum();
    let percent = stats.completion_percent();

    if json_output {
        let body = json!({
            "language": table.language(),
            "total": stats.total,
            "texts": stats.texts,
            "lists": stats.lists,
            "pending": stats.pending,
            "pending_keys": table.pending_keys().collect::<Vec<_>>(),
            "with_placeholders": stats.with_placeholders,
            "with_plurals": stats.with_plurals,
            "malformed": stats.malformed,
            "completion_percent": (percent * 100.0).round() / 100.0,
            "missing_plural_entries": plural_issues.len(),
            "missing_plural_categories_total": missing_plural_categories_total,
        });
        let rendered = serde_json::to_string_pretty(&body)
            .map_err(|e| format!("Failed to serialize stats JSON: {}", e))?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("=== Stats ===");
    println!("Language: {}", table.language());
    println!("  Total: {}", stats.total);
    println!("  Texts: {}", stats.texts);
    println!("  Lists: {}", stats.lists);
    println!("  Pending: {}", stats.pending);
    for key in table.pending_keys() {
        println!("    - {}", key);
    }
    println!("  With placeholders: {}", stats.with_placeholders);
    println!("  With plurals: {}", stats.with_plurals);
    if stats.malformed > 0 {
        println!("  Malformed: {}", stats.malformed);
    }
    println!("  Completion: {:.2}%", percent);
    println!(
        "  Missing plurals: {} (missing categories: {})",
        plural_issues.len(),
        missing_plural_categories_total
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_counts() {
        let table = LocaleTable::builder("it")
            .text("A", "{0} é richiesto")
            .text("B", "{num} ore {{s}}")
            .text("C", "{{a|b|c|d}}")
            .list("L", ["x", "y"])
            .pending("P", "plain")
            .build()
            .unwrap();

        assert_eq!(
            collect(&table),
            TableStats {
                total: 5,
                texts: 4,
                lists: 1,
                pending: 1,
                with_placeholders: 2,
                with_plurals: 1,
                malformed: 1,
            }
        );
        assert!((collect(&table).completion_percent() - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_builtin_counts() {
        let stats = collect(emsesp_i18n::locales::italian());
        assert_eq!(stats.total, 314);
        assert_eq!(stats.lists, 1);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.malformed, 0);
    }
}
