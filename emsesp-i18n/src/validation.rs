//! Completeness checks of a table against a reference table.
//!
//! A translated table is complete when it carries every reference key with
//! the same shape (text or list of the same length) and the same set of
//! placeholder arguments. Pending entries and extra keys are reported but do
//! not make a table incomplete.

use std::collections::HashSet;

use serde::Serialize;

use crate::{
    error::Error,
    placeholder::{PlaceholderSignature, signature},
    plural_rules::{PluralValidationReport, collect_table_plural_issues},
    types::{LocaleTable, Message},
};

/// A key whose value shape differs from the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindMismatch {
    pub key: String,
    pub expected: String,
    pub found: String,
}

/// A key whose placeholder arguments differ from the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderMismatch {
    pub key: String,
    pub expected: Vec<String>,
    pub found: Vec<String>,
}

/// A message whose text cannot be parsed as a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedEntry {
    pub language: String,
    pub key: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CompletenessReport {
    pub language: String,
    pub reference_language: String,
    pub total: usize,
    pub missing: Vec<String>,
    pub extra: Vec<String>,
    pub pending: Vec<String>,
    pub kind_mismatches: Vec<KindMismatch>,
    pub placeholder_mismatches: Vec<PlaceholderMismatch>,
    pub malformed: Vec<MalformedEntry>,
    /// Plural blocks with fewer forms than the language distinguishes.
    /// Informational only.
    pub plural_issues: Vec<PluralValidationReport>,
}

impl CompletenessReport {
    /// No missing keys and no shape, placeholder or syntax problems.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
            && self.kind_mismatches.is_empty()
            && self.placeholder_mismatches.is_empty()
            && self.malformed.is_empty()
    }

    /// Share of reference keys present and translated, in percent.
    ///
    /// Pending keys outside the reference do not count against it.
    pub fn translated_percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        let extra: HashSet<&str> = self.extra.iter().map(String::as_str).collect();
        let pending = self
            .pending
            .iter()
            .filter(|key| !extra.contains(key.as_str()))
            .count();
        let translated = self.total - self.missing.len().min(self.total);
        let translated = translated.saturating_sub(pending);
        translated as f64 * 100.0 / self.total as f64
    }

    /// One human-readable line per blocking issue.
    pub fn issues(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for key in &self.missing {
            lines.push(format!("{}: missing key `{}`", self.language, key));
        }
        for mismatch in &self.kind_mismatches {
            lines.push(format!(
                "{}: `{}` is {}, expected {}",
                self.language, mismatch.key, mismatch.found, mismatch.expected
            ));
        }
        for mismatch in &self.placeholder_mismatches {
            lines.push(format!(
                "{}: `{}` uses arguments [{}], expected [{}]",
                self.language,
                mismatch.key,
                mismatch.found.join(", "),
                mismatch.expected.join(", ")
            ));
        }
        for entry in &self.malformed {
            lines.push(format!(
                "{}: `{}` is malformed: {}",
                entry.language, entry.key, entry.message
            ));
        }
        lines
    }
}

fn shape(message: &Message) -> String {
    match message {
        Message::Text(_) => "text".to_string(),
        Message::List(items) => format!("list of {}", items.len()),
    }
}

fn sorted(signature: &PlaceholderSignature) -> Vec<String> {
    signature.arguments.iter().cloned().collect()
}

/// Compares `table` against `reference`.
pub fn check_completeness(table: &LocaleTable, reference: &LocaleTable) -> CompletenessReport {
    let mut report = CompletenessReport {
        language: table.language().to_string(),
        reference_language: reference.language().to_string(),
        total: reference.len(),
        pending: table.pending_keys().map(str::to_string).collect(),
        plural_issues: collect_table_plural_issues(table),
        ..CompletenessReport::default()
    };

    for reference_entry in reference.entries() {
        let key = &reference_entry.key;
        let Some(entry) = table.entry(key) else {
            report.missing.push(key.clone());
            continue;
        };

        let (expected, found) = (shape(&reference_entry.value), shape(&entry.value));
        if expected != found {
            report.kind_mismatches.push(KindMismatch {
                key: key.clone(),
                expected,
                found,
            });
            continue;
        }

        let (Message::Text(reference_text), Message::Text(text)) =
            (&reference_entry.value, &entry.value)
        else {
            continue;
        };

        let reference_signature = match signature(reference_text) {
            Ok(sig) => sig,
            Err(err) => {
                report.malformed.push(MalformedEntry {
                    language: reference.language().to_string(),
                    key: key.clone(),
                    message: err.to_string(),
                });
                continue;
            }
        };
        match signature(text) {
            Ok(sig) if !sig.is_compatible_with(&reference_signature) => {
                report.placeholder_mismatches.push(PlaceholderMismatch {
                    key: key.clone(),
                    expected: sorted(&reference_signature),
                    found: sorted(&sig),
                });
            }
            Ok(_) => {}
            Err(err) => report.malformed.push(MalformedEntry {
                language: table.language().to_string(),
                key: key.clone(),
                message: err.to_string(),
            }),
        }
    }

    report.extra = table
        .keys()
        .filter(|key| !reference.contains(key))
        .map(str::to_string)
        .collect();

    report
}

/// Fails with one line per blocking issue when `table` is incomplete.
pub fn validate_against(table: &LocaleTable, reference: &LocaleTable) -> Result<(), Error> {
    let report = check_completeness(table, reference);
    if report.is_complete() {
        Ok(())
    } else {
        Err(Error::validation_error(report.issues().join("\n")))
    }
}

/// Keys occurring more than once, in order of their second occurrence.
pub fn duplicate_keys<'a, I>(keys: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for key in keys {
        if !seen.insert(key) && !duplicates.contains(&key) {
            duplicates.push(key);
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> LocaleTable {
        LocaleTable::builder("en")
            .text("LANGUAGE", "Language")
            .text("IS_REQUIRED", "{0} is required")
            .text("NUM_DEVICES", "{num} Device{{s}}")
            .list("STATUS_NAMES", ["Rx", "Tx", "Tx writes"])
            .text("CERT", "TLS root certificate")
            .build()
            .unwrap()
    }

    #[test]
    fn test_complete_table_with_pending() {
        let table = LocaleTable::builder("it")
            .text("LANGUAGE", "Lingua")
            .text("IS_REQUIRED", "{0} é richiesto")
            .text("NUM_DEVICES", "{num} Dispositivi {{s}}")
            .list("STATUS_NAMES", ["Rx", "Tx", "Scritti"])
            .pending("CERT", "TLS root certificate")
            .build()
            .unwrap();

        let report = check_completeness(&table, &reference());
        assert!(report.is_complete(), "{:?}", report.issues());
        assert_eq!(report.pending, vec!["CERT"]);
        assert!((report.translated_percent() - 80.0).abs() < f64::EPSILON);
        assert!(validate_against(&table, &reference()).is_ok());
    }

    #[test]
    fn test_pending_extra_key_does_not_lower_percent() {
        let table = LocaleTable::builder("it")
            .text("LANGUAGE", "Lingua")
            .text("IS_REQUIRED", "{0} é richiesto")
            .text("NUM_DEVICES", "{num} Dispositivi {{s}}")
            .list("STATUS_NAMES", ["Rx", "Tx", "Scritti"])
            .text("CERT", "Certificato")
            .pending("OLD_KEY", "leftover")
            .build()
            .unwrap();

        let report = check_completeness(&table, &reference());
        assert_eq!(report.extra, vec!["OLD_KEY"]);
        assert_eq!(report.pending, vec!["OLD_KEY"]);
        assert!((report.translated_percent() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reports_every_issue_kind() {
        let table = LocaleTable::builder("it")
            .text("IS_REQUIRED", "{nome} é richiesto")
            .text("NUM_DEVICES", "{{a|b|c|d}}")
            .list("STATUS_NAMES", ["Rx", "Tx"])
            .text("CERT", "Certificato")
            .text("EXTRA_KEY", "in più")
            .build()
            .unwrap();

        let report = check_completeness(&table, &reference());
        assert!(!report.is_complete());
        assert_eq!(report.missing, vec!["LANGUAGE"]);
        assert_eq!(report.extra, vec!["EXTRA_KEY"]);
        assert_eq!(
            report.kind_mismatches,
            vec![KindMismatch {
                key: "STATUS_NAMES".to_string(),
                expected: "list of 3".to_string(),
                found: "list of 2".to_string(),
            }]
        );
        assert_eq!(report.placeholder_mismatches[0].key, "IS_REQUIRED");
        assert_eq!(report.placeholder_mismatches[0].expected, vec!["0"]);
        assert_eq!(report.placeholder_mismatches[0].found, vec!["nome"]);
        assert_eq!(report.malformed[0].key, "NUM_DEVICES");
        assert_eq!(report.malformed[0].language, "it");

        let err = validate_against(&table, &reference()).unwrap_err();
        assert_eq!(err.to_string().lines().count(), 4);
    }

    #[test]
    fn test_text_versus_list() {
        let table = LocaleTable::builder("it")
            .text("STATUS_NAMES", "Rx, Tx")
            .build()
            .unwrap();
        let report = check_completeness(&table, &reference());
        assert_eq!(report.kind_mismatches[0].expected, "list of 3");
        assert_eq!(report.kind_mismatches[0].found, "text");
    }

    #[test]
    fn test_duplicate_keys() {
        let keys = ["A", "B", "A", "C", "A", "B"];
        assert_eq!(duplicate_keys(keys), vec!["A", "B"]);
        assert!(duplicate_keys(["A", "B"]).is_empty());
    }
}
