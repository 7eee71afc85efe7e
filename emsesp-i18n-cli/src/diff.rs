use crate::convert::load_table;
use crate::validation::validate_output_path;
use emsesp_i18n::{DiffReport, diff_tables};

#[derive(Debug, Clone)]
pub struct DiffOptions {
    pub source: String,
    pub target: String,
    pub json: bool,
    pub output: Option<String>,
    pub strict: bool,
}

fn print_or_write(output: Option<&String>, content: &str) -> Result<(), String> {
    if let Some(path) = output {
        std::fs::write(path, content).map_err(|e| format!("Failed to write {}: {}", path, e))?;
        println!("Report written: {}", path);
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn render_human(report: &DiffReport) -> String {
    let summary = &report.summary;
    let mut lines = Vec::new();
    lines.push("=== Diff ===".to_string());
    lines.push(format!(
        "Languages: {} -> {}",
        report.source_language, report.target_language
    ));
    lines.push(format!(
        "Totals: added={}, removed={}, changed={}, status_changed={}, unchanged={}",
        summary.added, summary.removed, summary.changed, summary.status_changed, summary.unchanged
    ));

    if !report.added.is_empty() {
        lines.push(format!("  added keys: {}", report.added.join(", ")));
    }
    if !report.removed.is_empty() {
        lines.push(format!("  removed keys: {}", report.removed.join(", ")));
    }
    if !report.changed.is_empty() {
        let changed: Vec<_> = report
            .changed
            .iter()
            .map(|item| format!("{} ('{}' -> '{}')", item.key, item.source, item.target))
            .collect();
        lines.push(format!("  changed keys: {}", changed.join(", ")));
    }
    if !report.status_changed.is_empty() {
        let changed: Vec<_> = report
            .status_changed
            .iter()
            .map(|item| {
                format!(
                    "{} ({} -> {})",
                    item.key,
                    item.source.as_str(),
                    item.target.as_str()
                )
            })
            .collect();
        lines.push(format!("  status changes: {}", changed.join(", ")));
    }

    lines.join("\n")
}

pub fn run_diff_command(opts: DiffOptions) -> Result<(), String> {
    if let Some(output) = &opts.output {
        validate_output_path(output)?;
    }

    let source = load_table(Some(&opts.source), None, None, opts.strict)?;
    let target = load_table(Some(&opts.target), None, None, opts.strict)?;
    let report = diff_tables(&source, &target);

    let rendered = if opts.json {
        serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to serialize diff report JSON: {}", e))?
    } else {
        render_human(&report)
    };
    print_or_write(opts.output.as_ref(), &rendered)
}
