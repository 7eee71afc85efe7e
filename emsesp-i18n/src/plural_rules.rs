//! CLDR-style cardinal plural rules for a curated set of languages.
//!
//! Two questions are answered here: which categories a language distinguishes
//! at all, and which category a given count falls into.

use std::{
    collections::{BTreeMap, BTreeSet},
    str::FromStr,
};

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use crate::{
    template::Template,
    types::{LocaleTable, Message},
};

/// Standard CLDR plural forms.
#[derive(Ord, PartialOrd, Eq, PartialEq, Debug, Clone, Copy, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl FromStr for PluralCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ZERO" => Ok(PluralCategory::Zero),
            "ONE" => Ok(PluralCategory::One),
            "TWO" => Ok(PluralCategory::Two),
            "FEW" => Ok(PluralCategory::Few),
            "MANY" => Ok(PluralCategory::Many),
            "OTHER" => Ok(PluralCategory::Other),
            _ => Err(format!("Unknown plural category: {}", s)),
        }
    }
}

const OTHER_ONLY: &[&str] = &["ja", "zh", "ko", "th", "vi", "km", "lo", "my", "yue", "id", "ms"];

const ONE_OTHER: &[&str] = &[
    "en", "de", "nl", "sv", "da", "nb", "nn", "no", "is", "fi", "et", "fa", "hi", "bn", "gu", "ta",
    "te", "kn", "ml", "mr", "it", "es", "mk", "el", "eu", "gl", "af", "sw", "ur", "fil", "tl",
    "tr", "hu", "ca",
];

lazy_static! {
    /// Static mapping from base language subtag → plural categories the language distinguishes.
    static ref CATEGORY_TABLE: BTreeMap<&'static str, BTreeSet<PluralCategory>> = {
        use PluralCategory::*;
        let mut m: BTreeMap<&'static str, BTreeSet<PluralCategory>> = BTreeMap::new();

        fn s(items: &[PluralCategory]) -> BTreeSet<PluralCategory> {
            items.iter().copied().collect()
        }

        for code in ONE_OTHER {
            m.insert(*code, s(&[One, Other]));
        }

        // i = 0,1 is singular
        for code in ["fr", "pt", "hy", "kab"] {
            m.insert(code, s(&[One, Other]));
        }

        for code in OTHER_ONLY {
            m.insert(*code, s(&[Other]));
        }

        for code in ["ru", "uk", "be", "pl"] {
            m.insert(code, s(&[One, Few, Many, Other]));
        }

        for code in ["sr", "hr", "bs", "sh"] {
            m.insert(code, s(&[One, Few, Other]));
        }

        for code in ["cs", "sk", "lt"] {
            m.insert(code, s(&[One, Few, Many, Other]));
        }

        m.insert("sl", s(&[One, Two, Few, Other]));
        m.insert("lv", s(&[Zero, One, Other]));
        m.insert("ga", s(&[One, Two, Few, Many, Other]));
        m.insert("ro", s(&[One, Few, Other]));
        m.insert("ar", s(&[Zero, One, Two, Few, Many, Other]));

        // Hebrew (legacy code iw also maps here)
        for code in ["he", "iw"] {
            m.insert(code, s(&[One, Two, Many, Other]));
        }

        m
    };
}

/// Parses a language code leniently (underscores accepted); unparsable codes
/// become the undetermined language `und`.
pub fn parse_language(lang: &str) -> LanguageIdentifier {
    lang.replace('_', "-").parse().unwrap_or_default()
}

/// Returns the plural categories a language distinguishes.
///
/// Unknown or unsupported locales fall back to {Other} to avoid false positives.
pub fn required_categories_for(lang: &LanguageIdentifier) -> BTreeSet<PluralCategory> {
    CATEGORY_TABLE
        .get(lang.language.as_str())
        .cloned()
        .unwrap_or_else(|| [PluralCategory::Other].into_iter().collect())
}

/// Helper for string language codes (accepts underscores, normalizes to hyphen).
pub fn required_categories_for_str(lang: &str) -> BTreeSet<PluralCategory> {
    required_categories_for(&parse_language(lang))
}

/// Selects the cardinal category of `count` in `lang`.
///
/// Languages outside the curated table use the `one` (exactly 1) / `other` rule.
pub fn category_for(lang: &LanguageIdentifier, count: f64) -> PluralCategory {
    use PluralCategory::*;

    let n = count.abs();
    let is_int = n.fract() == 0.0;
    let i = n.trunc() as u64;
    let m10 = i % 10;
    let m100 = i % 100;
    let slavic_few = (2..=4).contains(&m10) && !(12..=14).contains(&m100);

    match lang.language.as_str() {
        code if OTHER_ONLY.contains(&code) => Other,
        "fr" | "pt" | "hy" | "kab" => {
            if i <= 1 {
                One
            } else {
                Other
            }
        }
        "ru" | "uk" | "be" => {
            if !is_int {
                Other
            } else if m10 == 1 && m100 != 11 {
                One
            } else if slavic_few {
                Few
            } else {
                Many
            }
        }
        "sr" | "hr" | "bs" | "sh" => {
            if !is_int {
                Other
            } else if m10 == 1 && m100 != 11 {
                One
            } else if slavic_few {
                Few
            } else {
                Other
            }
        }
        "pl" => {
            if !is_int {
                Other
            } else if i == 1 {
                One
            } else if slavic_few {
                Few
            } else {
                Many
            }
        }
        "cs" | "sk" => {
            if !is_int {
                Many
            } else if i == 1 {
                One
            } else if (2..=4).contains(&i) {
                Few
            } else {
                Other
            }
        }
        "lt" => {
            if !is_int {
                Many
            } else if m10 == 1 && !(11..=19).contains(&m100) {
                One
            } else if m10 >= 2 && !(11..=19).contains(&m100) {
                Few
            } else {
                Other
            }
        }
        "sl" => {
            if !is_int {
                Few
            } else {
                match m100 {
                    1 => One,
                    2 => Two,
                    3 | 4 => Few,
                    _ => Other,
                }
            }
        }
        "lv" => {
            if is_int && (m10 == 0 || (11..=19).contains(&m100)) {
                Zero
            } else if is_int && m10 == 1 && m100 != 11 {
                One
            } else {
                Other
            }
        }
        "ga" => match (is_int, i) {
            (true, 1) => One,
            (true, 2) => Two,
            (true, 3..=6) => Few,
            (true, 7..=10) => Many,
            _ => Other,
        },
        "ro" => {
            if is_int && i == 1 {
                One
            } else if !is_int || i == 0 || (2..=19).contains(&m100) {
                Few
            } else {
                Other
            }
        }
        "ar" => {
            if !is_int {
                Other
            } else {
                match (i, m100) {
                    (0, _) => Zero,
                    (1, _) => One,
                    (2, _) => Two,
                    (_, 3..=10) => Few,
                    (_, 11..=99) => Many,
                    _ => Other,
                }
            }
        }
        "he" | "iw" => {
            if is_int && i == 1 {
                One
            } else if is_int && i == 2 {
                Two
            } else if is_int && i > 10 && m10 == 0 {
                Many
            } else {
                Other
            }
        }
        _ => {
            if is_int && i == 1 {
                One
            } else {
                Other
            }
        }
    }
}

/// Categories a plural block with `arity` forms can tell apart.
pub fn categories_covered_by(arity: usize) -> BTreeSet<PluralCategory> {
    use PluralCategory::*;
    match arity {
        3 => [Zero, One, Other].into_iter().collect(),
        6 => [Zero, One, Two, Few, Many, Other].into_iter().collect(),
        _ => [One, Other].into_iter().collect(),
    }
}

/// Non-fatal report describing plural categories a message cannot express.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluralValidationReport {
    pub language: String,
    pub key: String,
    pub missing: BTreeSet<PluralCategory>,
    pub have: BTreeSet<PluralCategory>,
}

/// Collects messages whose plural blocks have too few forms for the table's language.
///
/// Messages that fail to parse are skipped; they are reported elsewhere.
pub fn collect_table_plural_issues(table: &LocaleTable) -> Vec<PluralValidationReport> {
    let lang_id = parse_language(table.language());
    let required = required_categories_for(&lang_id);

    let mut reports = Vec::new();
    for entry in table.entries() {
        let Message::Text(text) = &entry.value else {
            continue;
        };
        let Ok(template) = Template::parse(text) else {
            continue;
        };
        for block in template.plural_blocks() {
            let have = categories_covered_by(block.forms().len());
            let missing: BTreeSet<PluralCategory> = &required - &have;
            if !missing.is_empty() {
                reports.push(PluralValidationReport {
                    language: table.language().to_string(),
                    key: entry.key.clone(),
                    missing,
                    have,
                });
                break;
            }
        }
    }
    reports
}
