use crate::convert::load_table;
use crate::path_glob::expand_input_globs;
use emsesp_i18n::{CompletenessReport, check_completeness};

#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub inputs: Vec<String>,
    /// Reference file; the built-in table when absent.
    pub reference: Option<String>,
    pub json: bool,
    pub strict: bool,
}

fn render_human(input: &str, report: &CompletenessReport) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "=== {} ({} against {}) ===",
        input, report.language, report.reference_language
    ));
    lines.push(format!(
        "  Complete: {}",
        if report.is_complete() { "yes" } else { "no" }
    ));
    lines.push(format!("  Translated: {:.2}%", report.translated_percent()));

    let mut list = |label: &str, keys: &[String]| {
        if !keys.is_empty() {
            lines.push(format!("  {} ({}): {}", label, keys.len(), keys.join(", ")));
        }
    };
    list("Missing", &report.missing);
    list("Pending", &report.pending);
    list("Extra", &report.extra);

    for issue in report.issues().iter().skip(report.missing.len()) {
        lines.push(format!("  ! {}", issue));
    }
    for issue in &report.plural_issues {
        let missing: Vec<_> = issue.missing.iter().map(|c| format!("{:?}", c)).collect();
        lines.push(format!(
            "  ~ `{}` lacks plural forms: {}",
            issue.key,
            missing.join(", ")
        ));
    }

    lines.join("\n")
}

pub fn run_check_command(opts: CheckOptions) -> Result<(), String> {
    if opts.inputs.is_empty() {
        return Err("At least one --input is required".to_string());
    }

    let reference = load_table(opts.reference.as_deref(), None, None, opts.strict)?;
    let inputs = expand_input_globs(&opts.inputs)?;

    let mut reports = Vec::with_capacity(inputs.len());
    for input in &inputs {
        let table = load_table(Some(input), None, None, opts.strict)?;
        reports.push((input, check_completeness(&table, &reference)));
    }

    if opts.json {
        let body: Vec<_> = reports
            .iter()
            .map(|(input, report)| {
                serde_json::json!({
                    "input": input,
                    "complete": report.is_complete(),
                    "translated_percent": (report.translated_percent() * 100.0).round() / 100.0,
                    "report": report,
                })
            })
            .collect();
        let rendered = serde_json::to_string_pretty(&body)
            .map_err(|e| format!("Failed to serialize check report JSON: {}", e))?;
        println!("{}", rendered);
    } else {
        for (input, report) in &reports {
            println!("{}", render_human(input, report));
        }
    }

    let incomplete = reports
        .iter()
        .filter(|(_, report)| !report.is_complete())
        .count();
    if opts.strict && incomplete > 0 {
        return Err(format!(
            "{} of {} table(s) incomplete",
            incomplete,
            reports.len()
        ));
    }
    Ok(())
}
