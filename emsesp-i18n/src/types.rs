//! Core, format-agnostic types for emsesp-i18n.
//! Parsers decode into these; encoders serialize these.

use std::{
    collections::{BTreeMap, HashMap},
    fmt::Display,
    str::FromStr,
};

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use crate::{
    builder::LocaleTableBuilder,
    error::Error,
    template::{Args, Template},
};

lazy_static! {
    static ref KEY_REGEX: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").unwrap();
}

/// Returns `true` if `key` is usable as a message key.
///
/// Keys start with an ASCII letter and continue with letters, digits or `_`.
/// Anything else (including the `$`-prefixed sidecar keys of the flat JSON
/// format) is rejected.
pub fn is_valid_key(key: &str) -> bool {
    KEY_REGEX.is_match(key)
}

/// The value stored under a message key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Message {
    /// A single string, possibly carrying placeholder and plural markup.
    Text(String),

    /// An ordered sequence addressed by position (e.g. `STATUS_NAMES`).
    List(Vec<String>),
}

impl Message {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Message::Text(text) => Some(text),
            Message::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Message::Text(_) => None,
            Message::List(items) => Some(items),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Message::List(_))
    }

    /// Short kind name used in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Message::Text(_) => "text",
            Message::List(_) => "list",
        }
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Message::Text(text) => write!(f, "{}", text),
            Message::List(items) => write!(f, "[{}]", items.join(" | ")),
        }
    }
}

/// Translation status of an entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    /// The entry carries text in the table's language.
    #[default]
    Translated,

    /// The entry still carries source-language text awaiting translation.
    Pending,
}

impl EntryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Translated => "translated",
            EntryStatus::Pending => "pending",
        }
    }

    pub fn is_translated(&self) -> bool {
        matches!(self, EntryStatus::Translated)
    }
}

impl FromStr for EntryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRANSLATED" => Ok(EntryStatus::Translated),
            "PENDING" => Ok(EntryStatus::Pending),
            _ => Err(format!("Unknown entry status: {}", s)),
        }
    }
}

/// A single keyed message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Entry {
    /// Symbolic message identifier, stable across locales.
    pub key: String,

    pub value: Message,

    #[serde(default)]
    #[serde(skip_serializing_if = "EntryStatus::is_translated")]
    pub status: EntryStatus,

    /// Optional note for translators.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: Message) -> Self {
        Entry {
            key: key.into(),
            value,
            status: EntryStatus::Translated,
            comment: None,
        }
    }

    pub fn text(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, Message::Text(value.into()))
    }

    pub fn list<I, S>(key: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(key, Message::List(items.into_iter().map(Into::into).collect()))
    }

    /// A text entry whose value is still untranslated.
    pub fn pending(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::text(key, value).with_status(EntryStatus::Pending)
    }

    pub fn with_status(mut self, status: EntryStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn is_pending(&self) -> bool {
        self.status == EntryStatus::Pending
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Entry {{ key: {}, value: {}, status: {:?} }}",
            self.key, self.value, self.status
        )
    }
}

/// Table-level metadata.
///
/// `language` and `domain` are standard; any extra fields can be placed in `custom`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Metadata {
    /// The language code (e.g. "it", "en", "de-AT").
    pub language: String,

    /// The domain or project name (e.g. "emsesp").
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(default)]
    pub domain: String,

    /// Any other metadata fields not covered by the above.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    #[serde(default)]
    pub custom: BTreeMap<String, String>,
}

impl Metadata {
    pub fn new(language: impl Into<String>) -> Self {
        Metadata {
            language: language.into(),
            domain: String::new(),
            custom: BTreeMap::new(),
        }
    }
}

impl Display for Metadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map_all = self.custom.clone();
        map_all.insert("language".to_string(), self.language.clone());
        map_all.insert("domain".to_string(), self.domain.clone());
        write!(
            f,
            "Metadata {{ {} }}",
            map_all
                .iter()
                .map(|(k, v)| format!("{}: {}", k, v))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

/// The complete key → message mapping for one language.
///
/// A table is validated once on construction (unique, well-formed keys) and
/// offers read-only access afterwards. Entry order is preserved.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(try_from = "TableRepr", into = "TableRepr")]
pub struct LocaleTable {
    metadata: Metadata,
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

#[derive(Deserialize, Serialize)]
struct TableRepr {
    metadata: Metadata,
    #[serde(default)]
    entries: Vec<Entry>,
}

impl TryFrom<TableRepr> for LocaleTable {
    type Error = Error;

    fn try_from(repr: TableRepr) -> Result<Self, Self::Error> {
        LocaleTable::new(repr.metadata, repr.entries)
    }
}

impl From<LocaleTable> for TableRepr {
    fn from(table: LocaleTable) -> Self {
        TableRepr {
            metadata: table.metadata,
            entries: table.entries,
        }
    }
}

impl PartialEq for LocaleTable {
    fn eq(&self, other: &Self) -> bool {
        self.metadata == other.metadata && self.entries == other.entries
    }
}

impl Eq for LocaleTable {}

impl LocaleTable {
    /// Builds a table, rejecting malformed and repeated keys.
    pub fn new(metadata: Metadata, entries: Vec<Entry>) -> Result<Self, Error> {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if !is_valid_key(&entry.key) {
                return Err(Error::InvalidKey(entry.key.clone()));
            }
            if index.insert(entry.key.clone(), position).is_some() {
                return Err(Error::DuplicateKey(entry.key.clone()));
            }
        }

        Ok(LocaleTable {
            metadata,
            entries,
            index,
        })
    }

    /// Starts a fluent builder for a table in `language`.
    pub fn builder(language: impl Into<String>) -> LocaleTableBuilder {
        LocaleTableBuilder::new(language)
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn language(&self) -> &str {
        &self.metadata.language
    }

    pub fn language_identifier(&self) -> Option<LanguageIdentifier> {
        self.metadata.language.parse().ok()
    }

    /// Returns the same entries under different metadata.
    pub fn with_metadata(self, metadata: Metadata) -> Self {
        LocaleTable { metadata, ..self }
    }

    pub fn into_parts(self) -> (Metadata, Vec<Entry>) {
        (self.metadata, self.entries)
    }

    pub fn entry(&self, key: &str) -> Option<&Entry> {
        self.index.get(key).map(|&position| &self.entries[position])
    }

    pub fn get(&self, key: &str) -> Option<&Message> {
        self.entry(key).map(|entry| &entry.value)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Message::as_text)
    }

    pub fn list(&self, key: &str) -> Option<&[String]> {
        self.get(key).and_then(Message::as_list)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Keys in table order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys whose text still awaits translation.
    pub fn pending_keys(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|entry| entry.is_pending())
            .map(|entry| entry.key.as_str())
    }

    /// Looks up a text message and renders its placeholders and plural markup
    /// using this table's language.
    pub fn render(&self, key: &str, args: &Args) -> Result<String, Error> {
        let text = match self.get(key) {
            Some(Message::Text(text)) => text,
            Some(Message::List(_)) => return Err(Error::NotText(key.to_string())),
            None => return Err(Error::unknown_key(self.language(), key)),
        };
        Template::parse(text)?.render(self.language(), args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> LocaleTable {
        LocaleTable::new(
            Metadata::new("it"),
            vec![
                Entry::text("LANGUAGE", "Lingua"),
                Entry::text("IS_REQUIRED", "{0} é richiesto"),
                Entry::list("STATUS_NAMES", ["Rx", "Tx"]),
                Entry::pending("CERT", "TLS root certificate"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_key_validation() {
        assert!(is_valid_key("LANGUAGE"));
        assert!(is_valid_key("MQTT_ENTITY_FORMAT_0"));
        assert!(is_valid_key("camelCase"));
        assert!(!is_valid_key(""));
        assert!(!is_valid_key("0_LEADING_DIGIT"));
        assert!(!is_valid_key("$pending"));
        assert!(!is_valid_key("WITH SPACE"));
    }

    #[test]
    fn test_table_lookup() {
        let table = sample_table();
        assert_eq!(table.len(), 4);
        assert_eq!(table.language(), "it");
        assert_eq!(table.text("LANGUAGE"), Some("Lingua"));
        assert_eq!(table.list("STATUS_NAMES").unwrap().len(), 2);
        assert!(table.text("STATUS_NAMES").is_none());
        assert!(table.list("LANGUAGE").is_none());
        assert!(table.get("MISSING").is_none());
        assert!(table.contains("CERT"));
    }

    #[test]
    fn test_table_preserves_order() {
        let table = sample_table();
        let keys: Vec<_> = table.keys().collect();
        assert_eq!(keys, vec!["LANGUAGE", "IS_REQUIRED", "STATUS_NAMES", "CERT"]);
    }

    #[test]
    fn test_table_rejects_duplicates() {
        let result = LocaleTable::new(
            Metadata::new("it"),
            vec![Entry::text("A", "uno"), Entry::text("A", "due")],
        );
        assert!(matches!(result, Err(Error::DuplicateKey(key)) if key == "A"));
    }

    #[test]
    fn test_table_rejects_invalid_key() {
        let result = LocaleTable::new(Metadata::new("it"), vec![Entry::text("$x", "no")]);
        assert!(matches!(result, Err(Error::InvalidKey(_))));
    }

    #[test]
    fn test_pending_keys() {
        let table = sample_table();
        let pending: Vec<_> = table.pending_keys().collect();
        assert_eq!(pending, vec!["CERT"]);
        assert!(table.entry("CERT").unwrap().is_pending());
    }

    #[test]
    fn test_render_lookup_errors() {
        let table = sample_table();
        let args = Args::positional(["Username"]);
        assert_eq!(
            table.render("IS_REQUIRED", &args).unwrap(),
            "Username é richiesto"
        );
        assert!(matches!(
            table.render("STATUS_NAMES", &args),
            Err(Error::NotText(_))
        ));
        assert!(matches!(
            table.render("NOPE", &args),
            Err(Error::UnknownKey { .. })
        ));
    }

    #[test]
    fn test_serde_roundtrip_revalidates() {
        let table = sample_table();
        let json = serde_json::to_string(&table).unwrap();
        let parsed: LocaleTable = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, table);

        let duplicated = r#"{"metadata":{"language":"it"},"entries":[
            {"key":"A","value":"x"},{"key":"A","value":"y"}]}"#;
        assert!(serde_json::from_str::<LocaleTable>(duplicated).is_err());
    }

    #[test]
    fn test_entry_status_serde_and_from_str() {
        assert_eq!(EntryStatus::from_str("pending").unwrap(), EntryStatus::Pending);
        assert_eq!(
            EntryStatus::from_str("TRANSLATED").unwrap(),
            EntryStatus::Translated
        );
        assert!(EntryStatus::from_str("stale").is_err());

        let json = serde_json::to_string(&Entry::pending("CERT", "x")).unwrap();
        assert!(json.contains("\"status\":\"pending\""));
        let json = serde_json::to_string(&Entry::text("A", "x")).unwrap();
        assert!(!json.contains("status"));
    }

    #[test]
    fn test_message_display() {
        assert_eq!(Message::Text("Lingua".into()).to_string(), "Lingua");
        assert_eq!(
            Message::List(vec!["a".into(), "b".into()]).to_string(),
            "[a | b]"
        );
    }

    #[test]
    fn test_metadata_display() {
        let mut metadata = Metadata::new("it");
        metadata.domain = "emsesp".to_string();
        metadata
            .custom
            .insert("format".to_string(), "json".to_string());

        let display = format!("{}", metadata);
        assert!(display.contains("language: it"));
        assert!(display.contains("domain: emsesp"));
        assert!(display.contains("format: json"));
    }

    #[test]
    fn test_language_identifier() {
        let table = LocaleTable::new(Metadata::new("it-CH"), vec![]).unwrap();
        let lang_id = table.language_identifier().unwrap();
        assert_eq!(lang_id.language.as_str(), "it");
        assert_eq!(lang_id.region.unwrap().as_str(), "CH");
        assert!(table.is_empty());
    }
}
