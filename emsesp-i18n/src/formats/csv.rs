//! Translator worksheet in CSV form.
//!
//! One row per text message and one row per list item:
//!
//! ```csv
//! key,index,value,status
//! LANGUAGE,,Lingua,translated
//! STATUS_NAMES,0,Telegrammi EMS Ricevuti (Rx),translated
//! STATUS_NAMES,1,EMS Letti (Tx),translated
//! CERT,,TLS root certificate (leave blank to disable TLS),pending
//! ```
//!
//! An empty `status` cell reads as translated. List rows must be contiguous
//! and numbered from 0. A list without items is written as a single row
//! whose `index` cell is `[]` and whose `value` is empty.
//!
//! CSV carries no language; it comes from the file path or the caller.
//! Translator comments and the table `domain` are not written.

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    traits::Parser,
    types::{Entry, EntryStatus, LocaleTable, Message, Metadata},
};

/// `index` cell of the row standing for a list with no items.
pub const EMPTY_LIST_INDEX: &str = "[]";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CSVRecord {
    pub key: String,
    /// Position within a list message, or [`EMPTY_LIST_INDEX`]; empty for
    /// text messages.
    pub index: Option<String>,
    pub value: String,
    pub status: Option<EntryStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Format {
    pub entries: Vec<Entry>,
}

impl Format {
    pub fn into_table(self, language: impl Into<String>) -> Result<LocaleTable, Error> {
        LocaleTable::new(Metadata::new(language), self.entries)
    }

    /// Flattens the entries into worksheet rows.
    pub fn records(&self) -> Vec<CSVRecord> {
        let mut records = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            match &entry.value {
                Message::Text(text) => records.push(CSVRecord {
                    key: entry.key.clone(),
                    index: None,
                    value: text.clone(),
                    status: Some(entry.status),
                }),
                Message::List(items) if items.is_empty() => records.push(CSVRecord {
                    key: entry.key.clone(),
                    index: Some(EMPTY_LIST_INDEX.to_string()),
                    value: String::new(),
                    status: Some(entry.status),
                }),
                Message::List(items) => {
                    records.extend(items.iter().enumerate().map(|(index, item)| CSVRecord {
                        key: entry.key.clone(),
                        index: Some(index.to_string()),
                        value: item.clone(),
                        status: Some(entry.status),
                    }))
                }
            }
        }
        records
    }

    /// Groups worksheet rows back into entries.
    pub fn from_records(records: Vec<CSVRecord>) -> Result<Self, Error> {
        let mut entries: Vec<Entry> = Vec::new();

        for record in records {
            let status = record.status.unwrap_or_default();
            let Some(cell) = record.index.as_deref().map(str::trim) else {
                entries.push(Entry::text(record.key, record.value).with_status(status));
                continue;
            };

            if cell == EMPTY_LIST_INDEX {
                if !record.value.is_empty() {
                    return Err(Error::invalid_resource(format!(
                        "empty list `{}` cannot carry a value",
                        record.key
                    )));
                }
                entries.push(Entry::new(record.key, Message::List(Vec::new())).with_status(status));
                continue;
            }

            let index: usize = cell.parse().map_err(|_| {
                Error::invalid_resource(format!("`{}` has invalid index `{}`", record.key, cell))
            })?;

            // An empty list never continues; a following row for its key is a duplicate.
            let continues_list = entries.last().is_some_and(|last| {
                last.key == record.key && last.value.as_list().is_some_and(|items| !items.is_empty())
            });

            if !continues_list {
                if index != 0 {
                    return Err(Error::invalid_resource(format!(
                        "list `{}` must start at index 0, found {}",
                        record.key, index
                    )));
                }
                entries.push(Entry::list(record.key, [record.value]).with_status(status));
                continue;
            }

            let Some(last) = entries.last_mut() else {
                continue;
            };
            if let Message::List(items) = &mut last.value {
                if index != items.len() {
                    return Err(Error::invalid_resource(format!(
                        "list `{}` expected index {}, found {}",
                        last.key,
                        items.len(),
                        index
                    )));
                }
                items.push(record.value);
            }
            if status == EntryStatus::Pending {
                last.status = EntryStatus::Pending;
            }
        }

        Ok(Format { entries })
    }
}

impl From<&LocaleTable> for Format {
    fn from(table: &LocaleTable) -> Self {
        Format {
            entries: table.entries().to_vec(),
        }
    }
}

impl Parser for Format {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);
        let mut records = Vec::new();
        for result in rdr.deserialize() {
            records.push(result?);
        }
        Format::from_records(records)
    }

    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        let mut wtr = csv::WriterBuilder::new().from_writer(writer);
        for record in self.records() {
            wtr.serialize(record)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_parse_worksheet() {
        let content = indoc! {"
            key,index,value,status
            LANGUAGE,,Lingua,translated
            STATUS_NAMES,0,Rx,translated
            STATUS_NAMES,1,Tx,
            CERT,,\"TLS root certificate, leave blank\",pending
        "};

        let format = Format::from_str(content).unwrap();
        assert_eq!(format.entries.len(), 3);
        assert_eq!(format.entries[0], Entry::text("LANGUAGE", "Lingua"));
        assert_eq!(format.entries[1], Entry::list("STATUS_NAMES", ["Rx", "Tx"]));
        assert_eq!(
            format.entries[2],
            Entry::pending("CERT", "TLS root certificate, leave blank")
        );
    }

    #[test]
    fn test_write_worksheet() {
        let table = LocaleTable::builder("it")
            .text("LANGUAGE", "Lingua")
            .list("STATUS_NAMES", ["Rx", "Tx"])
            .pending("CERT", "x")
            .build()
            .unwrap();

        let mut out = Vec::new();
        Format::from(&table).to_writer(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert_eq!(
            written,
            indoc! {"
                key,index,value,status
                LANGUAGE,,Lingua,translated
                STATUS_NAMES,0,Rx,translated
                STATUS_NAMES,1,Tx,translated
                CERT,,x,pending
            "}
        );
    }

    #[test]
    fn test_pending_list_row_marks_whole_list() {
        let content = "key,index,value,status\nL,0,a,translated\nL,1,b,pending\n";
        let format = Format::from_str(content).unwrap();
        assert!(format.entries[0].is_pending());
    }

    #[test]
    fn test_list_rows_must_be_contiguous() {
        let gap = "key,index,value,status\nL,0,a,\nL,2,c,\n";
        assert!(matches!(
            Format::from_str(gap),
            Err(Error::InvalidResource(_))
        ));

        let late_start = "key,index,value,status\nL,1,a,\n";
        assert!(matches!(
            Format::from_str(late_start),
            Err(Error::InvalidResource(_))
        ));
    }

    #[test]
    fn test_split_list_becomes_duplicate() {
        let split = "key,index,value,status\nL,0,a,\nA,,x,\nL,0,b,\n";
        let format = Format::from_str(split).unwrap();
        assert!(matches!(
            format.into_table("it"),
            Err(Error::DuplicateKey(key)) if key == "L"
        ));
    }

    #[test]
    fn test_empty_list_survives_roundtrip() {
        let table = LocaleTable::builder("it")
            .text("A", "x")
            .entry(Entry::new("EMPTY", Message::List(Vec::new())).with_status(EntryStatus::Pending))
            .text("B", "")
            .build()
            .unwrap();

        let mut out = Vec::new();
        Format::from(&table).to_writer(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert_eq!(
            written,
            indoc! {"
                key,index,value,status
                A,,x,translated
                EMPTY,[],,pending
                B,,,translated
            "}
        );

        let parsed = Format::from_str(&written).unwrap();
        assert_eq!(parsed.entries, table.entries());
    }

    #[test]
    fn test_empty_list_marker_rules() {
        let with_value = "key,index,value,status\nL,[],a,\n";
        assert!(matches!(
            Format::from_str(with_value),
            Err(Error::InvalidResource(_))
        ));

        let followed = "key,index,value,status\nL,[],,\nL,0,a,\n";
        let format = Format::from_str(followed).unwrap();
        assert_eq!(format.entries.len(), 2);
        assert!(matches!(
            format.into_table("it"),
            Err(Error::DuplicateKey(key)) if key == "L"
        ));

        let bad_index = "key,index,value,status\nL,first,a,\n";
        assert!(matches!(
            Format::from_str(bad_index),
            Err(Error::InvalidResource(_))
        ));
    }

    #[test]
    fn test_bad_status_is_a_csv_error() {
        let content = "key,index,value,status\nA,,x,stale\n";
        assert!(matches!(Format::from_str(content), Err(Error::CsvParse(_))));
    }
}
