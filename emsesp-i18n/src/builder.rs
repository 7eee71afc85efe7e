//! Fluent builders for [`LocaleTable`] and [`Codec`].
//!
//! # Example
//!
//! ```rust
//! use emsesp_i18n::LocaleTable;
//!
//! let table = LocaleTable::builder("it")
//!     .domain("emsesp")
//!     .text("LANGUAGE", "Lingua")
//!     .list("STATUS_NAMES", ["Telegrammi EMS Ricevuti (Rx)", "EMS Letti (Tx)"])
//!     .pending("CERT", "TLS root certificate (leave blank to disable TLS)")
//!     .comment("awaiting translation")
//!     .build()?;
//!
//! assert_eq!(table.len(), 3);
//! assert_eq!(table.pending_keys().collect::<Vec<_>>(), vec!["CERT"]);
//! # Ok::<(), emsesp_i18n::Error>(())
//! ```

use std::path::Path;

use crate::{
    codec::Codec,
    error::Error,
    locales,
    read_options::ReadOptions,
    types::{Entry, LocaleTable, Metadata},
};

pub struct LocaleTableBuilder {
    metadata: Metadata,
    entries: Vec<Entry>,
}

impl LocaleTableBuilder {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            metadata: Metadata::new(language),
            entries: Vec::new(),
        }
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.metadata.domain = domain.into();
        self
    }

    pub fn custom(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.custom.insert(key.into(), value.into());
        self
    }

    pub fn entry(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn text(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entry(Entry::text(key, value))
    }

    pub fn pending(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entry(Entry::pending(key, value))
    }

    pub fn list<I, S>(self, key: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entry(Entry::list(key, items))
    }

    /// Attaches a translator comment to the most recently added entry.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        if let Some(last) = self.entries.last_mut() {
            last.comment = Some(comment.into());
        }
        self
    }

    /// Validates keys and produces the table.
    pub fn build(self) -> Result<LocaleTable, Error> {
        LocaleTable::new(self.metadata, self.entries)
    }
}

/// Builder for creating a `Codec` instance with a fluent interface.
///
/// ```rust,no_run
/// use emsesp_i18n::Codec;
///
/// let codec = Codec::builder()
///     .add_builtin("it")?
///     .add_file("i18n/en.json")?
///     .build();
/// # Ok::<(), emsesp_i18n::Error>(())
/// ```
#[derive(Default)]
pub struct CodecBuilder {
    codec: Codec,
    options: ReadOptions,
}

impl CodecBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options applied to every subsequent `add_file` call.
    pub fn with_options(mut self, options: ReadOptions) -> Self {
        self.options = options;
        self
    }

    /// Reads a locale file, inferring format and language from its path.
    pub fn add_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, Error> {
        self.codec.read_file(path, &self.options)?;
        Ok(self)
    }

    /// Adds a built-in table by language code.
    pub fn add_builtin(mut self, language: &str) -> Result<Self, Error> {
        let table = locales::builtin(language)
            .ok_or_else(|| Error::InvalidLanguage(format!("no built-in table for {}", language)))?;
        self.codec.add_table(table.clone());
        Ok(self)
    }

    pub fn add_table(mut self, table: LocaleTable) -> Self {
        self.codec.add_table(table);
        self
    }

    pub fn build(self) -> Codec {
        self.codec
    }
}
