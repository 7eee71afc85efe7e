//! All supported locale file formats.
//!
//! This module re-exports the main types for each format and provides
//! the [`FormatType`] enum for generic format handling across the crate.

pub mod csv;
pub mod flat_json;
pub mod table_json;

use std::{
    fmt::{Display, Formatter},
    path::Path,
    str::FromStr,
};

pub use csv::{CSVRecord, Format as CsvFormat};
pub use flat_json::Format as FlatJsonFormat;
pub use table_json::Format as TableJsonFormat;

use crate::Error;

/// Represents all supported locale file formats for generic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatType {
    /// One JSON object per language, key → string or array (`it.json`).
    FlatJson,
    /// Lossless JSON dump of a table with metadata, statuses and comments.
    TableJson,
    /// Translator worksheet with `key,index,value,status` columns.
    Csv,
}

/// Implements [`std::fmt::Display`] for [`FormatType`].
///
/// # Example
/// ```rust
/// use emsesp_i18n::formats::FormatType;
/// assert_eq!(FormatType::FlatJson.to_string(), "json");
/// assert_eq!(FormatType::TableJson.to_string(), "table-json");
/// assert_eq!(FormatType::Csv.to_string(), "csv");
/// ```
impl Display for FormatType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatType::FlatJson => write!(f, "json"),
            FormatType::TableJson => write!(f, "table-json"),
            FormatType::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for FormatType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "json" | "flat-json" => Ok(FormatType::FlatJson),
            "table-json" | "table" => Ok(FormatType::TableJson),
            "csv" => Ok(FormatType::Csv),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

impl FormatType {
    /// Supported format names, for help and error messages.
    pub fn names() -> &'static [&'static str] {
        &["json", "table-json", "csv"]
    }

    /// File suffix written by default for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            FormatType::FlatJson => "json",
            FormatType::TableJson => "table.json",
            FormatType::Csv => "csv",
        }
    }

    /// Infers the format from a file name.
    ///
    /// ```rust
    /// use emsesp_i18n::formats::FormatType;
    /// assert_eq!(FormatType::from_path("i18n/it.json"), Some(FormatType::FlatJson));
    /// assert_eq!(FormatType::from_path("it.table.json"), Some(FormatType::TableJson));
    /// assert_eq!(FormatType::from_path("it.CSV"), Some(FormatType::Csv));
    /// assert_eq!(FormatType::from_path("it.ts"), None);
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<FormatType> {
        let name = path.as_ref().file_name()?.to_str()?.to_ascii_lowercase();
        if name.ends_with(".table.json") {
            Some(FormatType::TableJson)
        } else if name.ends_with(".json") {
            Some(FormatType::FlatJson)
        } else if name.ends_with(".csv") {
            Some(FormatType::Csv)
        } else {
            None
        }
    }
}
