//! This module provides the `Codec` struct and the free functions for reading,
//! writing, caching and converting locale files.
//!
//! A `Codec` holds at most one `LocaleTable` per language. Files are read by
//! inferring the format from the file name and the language from the file
//! contents or its path (`i18n/it.json`, `i18n/it/index.json`).

use std::path::Path;

use log::{debug, warn};

use crate::{
    builder::CodecBuilder,
    error::Error,
    formats::{CsvFormat, FlatJsonFormat, FormatType, TableJsonFormat},
    locales,
    plural_rules::parse_language,
    provenance::{ProvenanceRecord, set_provenance, strip_provenance},
    read_options::ReadOptions,
    traits::Parser,
    types::{LocaleTable, Metadata},
};

/// Language recorded when a lenient read cannot determine one.
pub const UNDETERMINED_LANGUAGE: &str = "und";

/// Represents a collection of locale tables, one per language.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    tables: Vec<LocaleTable>,
}

impl Codec {
    /// Creates a new, empty `Codec`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `Codec` holding every built-in table.
    pub fn builtin() -> Self {
        let mut codec = Codec::new();
        for language in locales::available() {
            if let Some(table) = locales::builtin(language) {
                codec.add_table(table.clone());
            }
        }
        codec
    }

    /// Starts a fluent [`CodecBuilder`].
    pub fn builder() -> CodecBuilder {
        CodecBuilder::new()
    }

    /// Returns an iterator over all tables.
    pub fn iter(&self) -> std::slice::Iter<'_, LocaleTable> {
        self.tables.iter()
    }

    pub fn tables(&self) -> &[LocaleTable] {
        &self.tables
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Adds a table, replacing any table already loaded for the same language.
    pub fn add_table(&mut self, table: LocaleTable) {
        let language = normalize_language(table.language());
        if let Some(existing) = self
            .tables
            .iter_mut()
            .find(|existing| normalize_language(existing.language()) == language)
        {
            warn!("replacing already loaded table for language {}", language);
            *existing = table;
        } else {
            self.tables.push(table);
        }
    }

    /// Finds a table by language code.
    ///
    /// An exact match (after normalizing `_` to `-`) wins; otherwise a table
    /// sharing the base language is returned, so `it-CH` finds `it`.
    pub fn get_by_language(&self, lang: &str) -> Option<&LocaleTable> {
        let requested = parse_language(lang);
        let normalized = requested.to_string();

        self.tables
            .iter()
            .find(|table| normalize_language(table.language()) == normalized)
            .or_else(|| {
                self.tables
                    .iter()
                    .find(|table| parse_language(table.language()).language == requested.language)
            })
    }

    /// Language codes of all loaded tables, in load order.
    pub fn languages(&self) -> Vec<&str> {
        self.tables.iter().map(LocaleTable::language).collect()
    }

    /// Union of all keys, in first-seen order.
    pub fn all_keys(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.tables
            .iter()
            .flat_map(LocaleTable::keys)
            .filter(|key| seen.insert(*key))
            .collect()
    }

    /// Reads a locale file and adds the resulting table.
    ///
    /// # Parameters
    /// - `path`: Path to the locale file; the format is inferred from its name.
    /// - `options`: Language hint, strictness and provenance behavior.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the file was read and its table added, or an `Error` if the
    /// format is unsupported, parsing fails or no language can be determined
    /// in strict mode.
    pub fn read_file<P: AsRef<Path>>(&mut self, path: P, options: &ReadOptions) -> Result<(), Error> {
        let path = path.as_ref();
        let format = infer_format(path)?;
        let table = read_table_with_format(path, format, options)?;

        let (mut metadata, entries) = table.into_parts();
        metadata
            .custom
            .insert("format".to_string(), format.to_string());
        self.add_table(LocaleTable::new(metadata, entries)?);

        Ok(())
    }

    /// Caches the current tables to a JSON file.
    ///
    /// # Returns
    ///
    /// `Ok(())` if caching succeeds, or an `Error` if file I/O or serialization fails.
    pub fn cache_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(Error::Io)?;
        }
        let mut writer = std::fs::File::create(path).map_err(Error::Io)?;
        serde_json::to_writer(&mut writer, &self.tables).map_err(Error::Parse)?;
        Ok(())
    }

    /// Loads tables from a JSON cache file written by [`Codec::cache_to_file`].
    ///
    /// Every table is validated again on the way in.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let mut reader = std::fs::File::open(path).map_err(Error::Io)?;
        let tables: Vec<LocaleTable> = serde_json::from_reader(&mut reader).map_err(Error::Parse)?;

        let mut codec = Codec::new();
        for table in tables {
            codec.add_table(table);
        }
        Ok(codec)
    }
}

impl<'a> IntoIterator for &'a Codec {
    type Item = &'a LocaleTable;
    type IntoIter = std::slice::Iter<'a, LocaleTable>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.iter()
    }
}

/// Normalizes a language code for comparison (`it_CH` → `it-CH`).
///
/// Codes that do not parse normalize to `und`.
pub fn normalize_language(code: &str) -> String {
    parse_language(code).to_string()
}

/// Validates a caller-supplied language code and returns its normal form.
pub fn validate_language(code: &str) -> Result<String, Error> {
    language_candidate(code).ok_or_else(|| Error::InvalidLanguage(code.to_string()))
}

/// Accepts codes whose primary subtag is a 2 or 3 letter language, so that
/// ordinary file names such as `index` or `messages` are not taken for one.
fn language_candidate(code: &str) -> Option<String> {
    let lang_id: unic_langid::LanguageIdentifier = code.trim().replace('_', "-").parse().ok()?;
    (2..=3)
        .contains(&lang_id.language.as_str().len())
        .then(|| lang_id.to_string())
}

fn path_language_candidate(part: &str) -> Option<String> {
    language_candidate(part).filter(|language| language != UNDETERMINED_LANGUAGE)
}

/// Attempts to infer the language from the file path.
///
/// Looks at the first dot-separated part of the file name (`it.json`,
/// `it.table.json`, `en_GB.csv`) and then at the parent directory
/// (`i18n/it/index.json`).
///
/// ```rust
/// use emsesp_i18n::codec::infer_language_from_path;
///
/// assert_eq!(infer_language_from_path("i18n/it.json"), Some("it".to_string()));
/// assert_eq!(infer_language_from_path("i18n/pt_BR/index.json"), Some("pt-BR".to_string()));
/// assert_eq!(infer_language_from_path("translations.csv"), None);
/// ```
pub fn infer_language_from_path<P: AsRef<Path>>(path: P) -> Option<String> {
    let path = path.as_ref();
    let from_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.split('.').next())
        .and_then(path_language_candidate);

    from_name.or_else(|| {
        path.parent()
            .and_then(|parent| parent.file_name())
            .and_then(|name| name.to_str())
            .and_then(path_language_candidate)
    })
}

fn infer_format(path: &Path) -> Result<FormatType, Error> {
    FormatType::from_path(path).ok_or_else(|| {
        Error::UnsupportedFormat(format!(
            "cannot infer format of {}; expected one of: {}",
            path.display(),
            FormatType::names().join(", ")
        ))
    })
}

/// Reads one locale file, inferring its format from the file name.
pub fn read_table<P: AsRef<Path>>(path: P, options: &ReadOptions) -> Result<LocaleTable, Error> {
    let path = path.as_ref();
    read_table_with_format(path, infer_format(path)?, options)
}

/// Reads one locale file in an explicit format.
///
/// The language is taken from, in order: `options.language_hint`, the file
/// contents (`$language` or table metadata), the file name, the parent
/// directory. When none applies, strict reads fail and lenient reads fall
/// back to `und`.
pub fn read_table_with_format<P: AsRef<Path>>(
    path: P,
    format: FormatType,
    options: &ReadOptions,
) -> Result<LocaleTable, Error> {
    let path = path.as_ref();
    debug!("reading {} as {}", path.display(), format);

    let hint = options
        .language_hint
        .as_deref()
        .map(validate_language)
        .transpose()?;

    let (declared, metadata, entries) = match format {
        FormatType::FlatJson => {
            let parsed = FlatJsonFormat::read_from(path)?;
            let declared = parsed.language.as_deref().map(validate_language).transpose()?;
            (declared, None, parsed.entries)
        }
        FormatType::TableJson => {
            let (metadata, entries) = TableJsonFormat::read_from(path)?.table.into_parts();
            let declared = Some(validate_language(&metadata.language)?);
            (declared, Some(metadata), entries)
        }
        FormatType::Csv => (None, None, CsvFormat::read_from(path)?.entries),
    };

    let language = match hint
        .or(declared)
        .or_else(|| infer_language_from_path(path))
    {
        Some(language) => language,
        None if options.strict => {
            return Err(Error::InvalidLanguage(format!(
                "cannot determine the language of {}; pass a language explicitly",
                path.display()
            )));
        }
        None => {
            warn!(
                "cannot determine the language of {}, using `{}`",
                path.display(),
                UNDETERMINED_LANGUAGE
            );
            UNDETERMINED_LANGUAGE.to_string()
        }
    };
    debug!("{} resolved to language {}", path.display(), language);

    let mut metadata = metadata.unwrap_or_else(|| Metadata::new(""));
    metadata.language = language;
    if options.attach_provenance {
        set_provenance(
            &mut metadata,
            &ProvenanceRecord {
                source_path: Some(path.display().to_string()),
                source_format: Some(format.to_string()),
            },
        );
    }

    let table = LocaleTable::new(metadata, entries)?;
    if options.strict {
        for key in table.pending_keys() {
            warn!("{}: `{}` is pending translation", path.display(), key);
        }
    }
    Ok(table)
}

/// Writes a table to `path` in `format`, creating parent directories.
pub fn write_table<P: AsRef<Path>>(
    table: &LocaleTable,
    path: P,
    format: FormatType,
) -> Result<(), Error> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    debug!("writing {} ({} entries) as {}", path.display(), table.len(), format);

    match format {
        FormatType::FlatJson => FlatJsonFormat::from(table).write_to(path),
        FormatType::TableJson => TableJsonFormat::from(table.clone()).write_to(path),
        FormatType::Csv => CsvFormat::from(table).write_to(path),
    }
}

/// Convert a locale file from one format to another, inferring both formats
/// from the file names.
///
/// # Example
///
/// ```rust,no_run
/// use emsesp_i18n::convert;
/// convert("i18n/it.json", "worksheets/it.csv")?;
/// # Ok::<(), emsesp_i18n::Error>(())
/// ```
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<(), Error> {
    convert_with(input, None, output, None, &ReadOptions::default())
}

/// Convert a locale file with explicit formats and read options.
///
/// # Arguments
///
/// * `input` - The input file path.
/// * `input_format` - The format of the input file, or `None` to infer it.
/// * `output` - The output file path.
/// * `output_format` - The format of the output file, or `None` to infer it.
/// * `options` - How the input is read.
///
/// # Errors
///
/// Returns an `Error` if a format cannot be inferred, or if reading, parsing
/// or writing fails.
pub fn convert_with<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    input_format: Option<FormatType>,
    output: Q,
    output_format: Option<FormatType>,
    options: &ReadOptions,
) -> Result<(), Error> {
    let input = input.as_ref();
    let output = output.as_ref();
    let input_format = match input_format {
        Some(format) => format,
        None => infer_format(input)?,
    };
    let output_format = match output_format {
        Some(format) => format,
        None => infer_format(output)?,
    };

    let table = read_table_with_format(input, input_format, options)?;
    let (mut metadata, entries) = table.into_parts();
    strip_provenance(&mut metadata);

    write_table(&LocaleTable::new(metadata, entries)?, output, output_format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryStatus;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_language_candidate() {
        assert_eq!(language_candidate("it"), Some("it".to_string()));
        assert_eq!(language_candidate("pt_BR"), Some("pt-BR".to_string()));
        assert_eq!(language_candidate("index"), None);
        assert_eq!(language_candidate("und"), Some("und".to_string()));
        assert_eq!(path_language_candidate("und"), None);
        assert_eq!(language_candidate("not a code"), None);
    }

    #[test]
    fn test_infer_language_from_path() {
        assert_eq!(infer_language_from_path("it.table.json"), Some("it".into()));
        assert_eq!(infer_language_from_path("i18n/de/index.json"), Some("de".into()));
        assert_eq!(infer_language_from_path("messages.json"), None);
    }

    #[test]
    fn test_get_by_language_falls_back_to_base() {
        let codec = Codec::builtin();
        assert_eq!(codec.get_by_language("it").unwrap().language(), "it");
        assert_eq!(codec.get_by_language("it_CH").unwrap().language(), "it");
        assert!(codec.get_by_language("de").is_none());
    }

    #[test]
    fn test_add_table_replaces_same_language() {
        let mut codec = Codec::new();
        codec.add_table(LocaleTable::builder("it").text("A", "uno").build().unwrap());
        codec.add_table(LocaleTable::builder("en").text("B", "two").build().unwrap());
        codec.add_table(LocaleTable::builder("it").text("C", "tre").build().unwrap());

        assert_eq!(codec.len(), 2);
        assert_eq!(codec.languages(), vec!["it", "en"]);
        assert_eq!(codec.all_keys(), vec!["C", "B"]);
    }

    #[test]
    fn test_read_file_records_format_and_language() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("it.json");
        fs::write(&path, r#"{"LANGUAGE": "Lingua", "CERT": "x", "$pending": ["CERT"]}"#).unwrap();

        let mut codec = Codec::new();
        codec
            .read_file(&path, &ReadOptions::new().with_provenance(true))
            .unwrap();

        let table = codec.get_by_language("it").unwrap();
        assert_eq!(table.metadata().custom.get("format").unwrap(), "json");
        assert_eq!(table.entry("CERT").unwrap().status, EntryStatus::Pending);
        let provenance = crate::provenance::provenance(table.metadata()).unwrap();
        assert_eq!(provenance.source_format.as_deref(), Some("json"));
    }

    #[test]
    fn test_language_precedence() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("it.json");
        fs::write(&path, r#"{"$language": "de", "A": "x"}"#).unwrap();

        let declared = read_table(&path, &ReadOptions::new()).unwrap();
        assert_eq!(declared.language(), "de");

        let hinted = read_table(
            &path,
            &ReadOptions::new().with_language_hint(Some("fr".to_string())),
        )
        .unwrap();
        assert_eq!(hinted.language(), "fr");

        let bad_hint = read_table(
            &path,
            &ReadOptions::new().with_language_hint(Some("??".to_string())),
        );
        assert!(matches!(bad_hint, Err(Error::InvalidLanguage(_))));
    }

    #[test]
    fn test_unknown_language_strict_and_lenient() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("messages.csv");
        fs::write(&path, "key,index,value,status\nA,,x,\n").unwrap();

        let lenient = read_table(&path, &ReadOptions::new()).unwrap();
        assert_eq!(lenient.language(), UNDETERMINED_LANGUAGE);

        let strict = read_table(&path, &ReadOptions::new().with_strict(true));
        assert!(matches!(strict, Err(Error::InvalidLanguage(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let mut codec = Codec::new();
        let result = codec.read_file("it.ts", &ReadOptions::new());
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn test_cache_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cache").join("tables.json");

        let codec = Codec::builtin();
        codec.cache_to_file(&path).unwrap();
        let loaded = Codec::load_from_file(&path).unwrap();
        assert_eq!(loaded.tables(), codec.tables());
    }

    #[test]
    fn test_convert_strips_provenance() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("it.json");
        let output = dir.path().join("out").join("it.table.json");
        fs::write(&input, r#"{"A": "x", "L": ["a", "b"]}"#).unwrap();

        convert_with(
            &input,
            None,
            &output,
            None,
            &ReadOptions::new().with_provenance(true),
        )
        .unwrap();

        let table = read_table(&output, &ReadOptions::new()).unwrap();
        assert_eq!(table.language(), "it");
        assert!(table.metadata().custom.is_empty());
        assert_eq!(table.list("L").unwrap().len(), 2);
    }
}
