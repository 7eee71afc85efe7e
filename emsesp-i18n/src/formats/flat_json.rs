//! Flat JSON locale files (`it.json`).
//!
//! The file is one JSON object mapping message keys to a string or an array
//! of strings, in table order. Two reserved keys carry sidecar data:
//!
//! - `"$language"`: optional language code of the file.
//! - `"$pending"`: keys whose text still awaits translation.
//!
//! ```json
//! {
//!   "$language": "it",
//!   "LANGUAGE": "Lingua",
//!   "STATUS_NAMES": ["Telegrammi EMS Ricevuti (Rx)", "EMS Letti (Tx)"],
//!   "CERT": "TLS root certificate (leave blank to disable TLS)",
//!   "$pending": ["CERT"]
//! }
//! ```
//!
//! Translator comments and the table `domain` have no place in this format
//! and are dropped on write.

use std::{
    collections::HashSet,
    fmt,
    io::{BufRead, Write},
};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};
use serde_json::Value;

use crate::{
    error::Error,
    traits::Parser,
    types::{Entry, EntryStatus, LocaleTable, Message, Metadata, is_valid_key},
};

pub const LANGUAGE_KEY: &str = "$language";
pub const PENDING_KEY: &str = "$pending";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Format {
    /// Language declared by the `$language` key, if any.
    pub language: Option<String>,
    pub entries: Vec<Entry>,
}

impl Format {
    /// Converts into a table in `language`.
    pub fn into_table(self, language: impl Into<String>) -> Result<LocaleTable, Error> {
        LocaleTable::new(Metadata::new(language), self.entries)
    }
}

impl From<&LocaleTable> for Format {
    fn from(table: &LocaleTable) -> Self {
        Format {
            language: Some(table.language().to_string()),
            entries: table.entries().to_vec(),
        }
    }
}

impl From<LocaleTable> for Format {
    fn from(table: LocaleTable) -> Self {
        let (metadata, entries) = table.into_parts();
        Format {
            language: Some(metadata.language),
            entries,
        }
    }
}

/// The raw key/value pairs of a JSON object, duplicates and order preserved.
struct RawObject(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for RawObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RawObjectVisitor;

        impl<'de> Visitor<'de> for RawObjectVisitor {
            type Value = RawObject;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object of message keys")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<RawObject, A::Error> {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(pair) = access.next_entry::<String, Value>()? {
                    pairs.push(pair);
                }
                Ok(RawObject(pairs))
            }
        }

        deserializer.deserialize_map(RawObjectVisitor)
    }
}

impl Serialize for Format {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let pending: Vec<&str> = self
            .entries
            .iter()
            .filter(|entry| entry.is_pending())
            .map(|entry| entry.key.as_str())
            .collect();

        let mut map = serializer.serialize_map(None)?;
        if let Some(language) = &self.language {
            map.serialize_entry(LANGUAGE_KEY, language)?;
        }
        for entry in &self.entries {
            map.serialize_entry(&entry.key, &entry.value)?;
        }
        if !pending.is_empty() {
            map.serialize_entry(PENDING_KEY, &pending)?;
        }
        map.end()
    }
}

fn message_from_value(key: &str, value: Value) -> Result<Message, Error> {
    match value {
        Value::String(text) => Ok(Message::Text(text)),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(text) => Ok(text),
                other => Err(Error::invalid_resource(format!(
                    "list `{}` must only contain strings, found {}",
                    key, other
                ))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Message::List),
        other => Err(Error::invalid_resource(format!(
            "value of `{}` must be a string or an array of strings, found {}",
            key, other
        ))),
    }
}

fn string_list(key: &str, value: Value) -> Result<Vec<String>, Error> {
    match message_from_value(key, value)? {
        Message::List(items) => Ok(items),
        Message::Text(_) => Err(Error::invalid_resource(format!(
            "`{}` must be an array of keys",
            key
        ))),
    }
}

impl Parser for Format {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let RawObject(pairs) = serde_json::from_reader(reader)?;

        let mut seen = HashSet::with_capacity(pairs.len());
        let mut language = None;
        let mut pending = Vec::new();
        let mut entries = Vec::with_capacity(pairs.len());

        for (key, value) in pairs {
            if !seen.insert(key.clone()) {
                return Err(Error::DuplicateKey(key));
            }
            match key.as_str() {
                LANGUAGE_KEY => match value {
                    Value::String(code) => language = Some(code),
                    other => {
                        return Err(Error::invalid_resource(format!(
                            "`{}` must be a string, found {}",
                            LANGUAGE_KEY, other
                        )));
                    }
                },
                PENDING_KEY => pending = string_list(PENDING_KEY, value)?,
                reserved if reserved.starts_with('$') => {
                    return Err(Error::invalid_resource(format!(
                        "unknown reserved key `{}`",
                        reserved
                    )));
                }
                _ if !is_valid_key(&key) => return Err(Error::InvalidKey(key)),
                _ => {
                    let message = message_from_value(&key, value)?;
                    entries.push(Entry::new(key, message));
                }
            }
        }

        for key in pending {
            let entry = entries
                .iter_mut()
                .find(|entry| entry.key == key)
                .ok_or_else(|| {
                    Error::invalid_resource(format!(
                        "`{}` lists `{}`, which is not in the file",
                        PENDING_KEY, key
                    ))
                })?;
            entry.status = EntryStatus::Pending;
        }

        Ok(Format { language, entries })
    }

    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_parse_flat_json() {
        let content = indoc! {r#"
            {
              "$language": "it",
              "LANGUAGE": "Lingua",
              "IS_REQUIRED": "{0} é richiesto",
              "STATUS_NAMES": ["Rx", "Tx"],
              "CERT": "TLS root certificate",
              "$pending": ["CERT"]
            }
        "#};

        let format = Format::from_str(content).unwrap();
        assert_eq!(format.language.as_deref(), Some("it"));
        let keys: Vec<_> = format.entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["LANGUAGE", "IS_REQUIRED", "STATUS_NAMES", "CERT"]);
        assert_eq!(
            format.entries[2].value,
            Message::List(vec!["Rx".into(), "Tx".into()])
        );
        assert!(format.entries[3].is_pending());
        assert!(!format.entries[0].is_pending());
    }

    #[test]
    fn test_write_keeps_order_and_pending_sidecar() {
        let table = LocaleTable::builder("it")
            .text("Z_LAST_ALPHABETICALLY", "z")
            .text("A_FIRST", "a")
            .pending("CERT", "x")
            .build()
            .unwrap();

        let mut out = Vec::new();
        Format::from(&table).to_writer(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();

        let z = written.find("Z_LAST_ALPHABETICALLY").unwrap();
        let a = written.find("A_FIRST").unwrap();
        assert!(z < a);
        assert!(written.contains("\"$pending\": [\n    \"CERT\"\n  ]"));
        assert!(written.starts_with("{\n  \"$language\": \"it\""));
    }

    #[test]
    fn test_duplicate_keys_are_rejected() {
        let result = Format::from_str(r#"{"A": "uno", "A": "due"}"#);
        assert!(matches!(result, Err(Error::DuplicateKey(key)) if key == "A"));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            Format::from_str(r#"{"A": 1}"#),
            Err(Error::InvalidResource(_))
        ));
        assert!(matches!(
            Format::from_str(r#"{"A": {"nested": "x"}}"#),
            Err(Error::InvalidResource(_))
        ));
        assert!(matches!(
            Format::from_str(r#"{"A": ["ok", 2]}"#),
            Err(Error::InvalidResource(_))
        ));
        assert!(matches!(
            Format::from_str(r#"{"bad key": "x"}"#),
            Err(Error::InvalidKey(_))
        ));
        assert!(matches!(
            Format::from_str(r#"{"$other": "x"}"#),
            Err(Error::InvalidResource(_))
        ));
        assert!(matches!(
            Format::from_str(r#"["not", "an", "object"]"#),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_pending_must_name_present_key() {
        let result = Format::from_str(r#"{"A": "x", "$pending": ["B"]}"#);
        assert!(matches!(result, Err(Error::InvalidResource(_))));
    }

    #[test]
    fn test_bom_prefixed_bytes() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(r#"{"LANGUAGE": "Lingua"}"#.as_bytes());
        let format = Format::from_bytes(&bytes).unwrap();
        assert_eq!(format.entries.len(), 1);
    }

    #[test]
    fn test_into_table() {
        let format = Format::from_str(r#"{"A": "x", "B": ["y"]}"#).unwrap();
        let table = format.into_table("it").unwrap();
        assert_eq!(table.language(), "it");
        assert_eq!(table.list("B").unwrap(), ["y".to_string()]);
    }
}
