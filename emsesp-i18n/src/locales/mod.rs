//! Locale tables compiled into the crate.
//!
//! Each table is kept as a static literal and turned into a [`LocaleTable`]
//! the first time it is requested.

mod it;

use lazy_static::lazy_static;

use crate::{
    plural_rules::parse_language,
    types::{Entry, LocaleTable, Metadata},
};

/// Domain recorded in the metadata of built-in tables.
pub const DOMAIN: &str = "emsesp";

/// One literal entry of a built-in table.
#[derive(Debug, Clone, Copy)]
pub(crate) enum RawEntry {
    Text(&'static str, &'static str),
    List(&'static str, &'static [&'static str]),
    /// Text still in the source language, awaiting translation.
    Pending(&'static str, &'static str),
}

impl RawEntry {
    fn to_entry(self) -> Entry {
        match self {
            RawEntry::Text(key, value) => Entry::text(key, value),
            RawEntry::List(key, items) => Entry::list(key, items.iter().copied()),
            RawEntry::Pending(key, value) => Entry::pending(key, value),
        }
    }
}

fn build_table(language: &str, entries: &[RawEntry]) -> LocaleTable {
    let mut metadata = Metadata::new(language);
    metadata.domain = DOMAIN.to_string();
    LocaleTable::new(metadata, entries.iter().map(|raw| raw.to_entry()).collect())
        .expect("built-in locale tables have unique, well-formed keys")
}

lazy_static! {
    static ref ITALIAN: LocaleTable = build_table(it::LANGUAGE, it::ENTRIES);
}

/// Languages with a built-in table.
pub fn available() -> &'static [&'static str] {
    &[it::LANGUAGE]
}

/// The built-in Italian table.
pub fn italian() -> &'static LocaleTable {
    &ITALIAN
}

/// Returns the built-in table for `language`, matching on the base language
/// (`it-CH` resolves to `it`).
pub fn builtin(language: &str) -> Option<&'static LocaleTable> {
    match parse_language(language).language.as_str() {
        "it" => Some(italian()),
        _ => None,
    }
}
