//! Lossless JSON dump of a single table.
//!
//! Unlike flat JSON this keeps metadata, statuses and translator comments:
//!
//! ```json
//! {
//!   "metadata": { "language": "it", "domain": "emsesp" },
//!   "entries": [
//!     { "key": "LANGUAGE", "value": "Lingua" },
//!     { "key": "CERT", "value": "TLS root certificate", "status": "pending" }
//!   ]
//! }
//! ```

use std::io::{BufRead, Write};

use crate::{error::Error, traits::Parser, types::LocaleTable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    pub table: LocaleTable,
}

impl From<LocaleTable> for Format {
    fn from(table: LocaleTable) -> Self {
        Format { table }
    }
}

impl From<Format> for LocaleTable {
    fn from(format: Format) -> Self {
        format.table
    }
}

impl Parser for Format {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let table: LocaleTable = serde_json::from_reader(reader)?;
        Ok(Format { table })
    }

    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(&mut writer, &self.table)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryStatus;
    use indoc::indoc;

    #[test]
    fn test_parse_table_json() {
        let content = indoc! {r#"
            {
              "metadata": { "language": "it", "domain": "emsesp" },
              "entries": [
                { "key": "LANGUAGE", "value": "Lingua", "comment": "menu" },
                { "key": "STATUS_NAMES", "value": ["Rx", "Tx"] },
                { "key": "CERT", "value": "TLS", "status": "pending" }
              ]
            }
        "#};

        let table = Format::from_str(content).unwrap().table;
        assert_eq!(table.language(), "it");
        assert_eq!(table.metadata().domain, "emsesp");
        assert_eq!(table.entry("LANGUAGE").unwrap().comment.as_deref(), Some("menu"));
        assert_eq!(table.list("STATUS_NAMES").unwrap().len(), 2);
        assert_eq!(table.entry("CERT").unwrap().status, EntryStatus::Pending);
    }

    #[test]
    fn test_write_then_read_keeps_comments() {
        let table = LocaleTable::builder("it")
            .domain("emsesp")
            .text("A", "uno")
            .comment("first")
            .pending("B", "two")
            .build()
            .unwrap();

        let mut out = Vec::new();
        Format::from(table.clone()).to_writer(&mut out).unwrap();
        let parsed = Format::from_bytes(&out).unwrap();
        assert_eq!(parsed.table, table);
    }

    #[test]
    fn test_invalid_table_is_rejected() {
        let duplicated = r#"{"metadata":{"language":"it"},"entries":[
            {"key":"A","value":"x"},{"key":"A","value":"y"}]}"#;
        assert!(matches!(Format::from_str(duplicated), Err(Error::Parse(_))));

        let missing_metadata = r#"{"entries":[]}"#;
        assert!(Format::from_str(missing_metadata).is_err());
    }
}
