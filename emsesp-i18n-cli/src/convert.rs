use crate::validation::{
    resolve_format, validate_file_path, validate_language_code, validate_output_path,
};

use emsesp_i18n::{LocaleTable, ReadOptions, codec::read_table_with_format, locales};

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: String,
    pub output: String,
    pub input_format: Option<String>,
    pub output_format: Option<String>,
    pub lang: Option<String>,
    pub strict: bool,
}

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub output: String,
    pub lang: String,
    pub format: Option<String>,
}

/// Read a table from a file, or take the built-in table for `lang`.
pub fn load_table(
    input: Option<&str>,
    input_format: Option<&str>,
    lang: Option<&str>,
    strict: bool,
) -> Result<LocaleTable, String> {
    if let Some(lang) = lang {
        validate_language_code(lang)?;
    }

    let Some(input) = input else {
        let lang = lang.unwrap_or(emsesp_i18n::localizer::DEFAULT_LANGUAGE);
        return locales::builtin(lang).cloned().ok_or_else(|| {
            format!(
                "No built-in table for language: {}. Available: {}",
                lang,
                locales::available().join(", ")
            )
        });
    };

    validate_file_path(input)?;
    let format = resolve_format(input_format, input)?;
    let options = ReadOptions::new()
        .with_language_hint(lang.map(str::to_string))
        .with_strict(strict);

    read_table_with_format(input, format, &options)
        .map_err(|e| format!("Failed to read {}: {}", input, e))
}

pub fn run_convert_command(opts: ConvertOptions) -> Result<(), String> {
    validate_output_path(&opts.output)?;
    let output_format = resolve_format(opts.output_format.as_deref(), &opts.output)?;

    let table = load_table(
        Some(&opts.input),
        opts.input_format.as_deref(),
        opts.lang.as_deref(),
        opts.strict,
    )?;

    emsesp_i18n::write_table(&table, &opts.output, output_format)
        .map_err(|e| format!("Failed to write {}: {}", opts.output, e))?;

    println!(
        "✅ Converted {} entries ({}) to {} ({})",
        table.len(),
        table.language(),
        opts.output,
        output_format
    );
    Ok(())
}

pub fn run_export_command(opts: ExportOptions) -> Result<(), String> {
    validate_output_path(&opts.output)?;
    let format = resolve_format(opts.format.as_deref(), &opts.output)?;
    let table = load_table(None, None, Some(&opts.lang), false)?;

    emsesp_i18n::write_table(&table, &opts.output, format)
        .map_err(|e| format!("Failed to write {}: {}", opts.output, e))?;

    println!(
        "✅ Exported {} entries ({}) to {}",
        table.len(),
        table.language(),
        opts.output
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_builtin() {
        let table = load_table(None, None, None, false).unwrap();
        assert_eq!(table.language(), "it");
        assert!(load_table(None, None, Some("it-CH"), false).is_ok());
        assert!(load_table(None, None, Some("de"), false).is_err());
    }

    #[test]
    fn test_load_file_with_language_hint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("worksheet.csv");
        std::fs::write(&path, "key,index,value,status\nLANGUAGE,,Sprache,\n").unwrap();
        let path = path.to_str().unwrap();

        assert!(load_table(Some(path), None, None, true).is_err());
        let table = load_table(Some(path), None, Some("de"), true).unwrap();
        assert_eq!(table.language(), "de");
        assert_eq!(table.text("LANGUAGE"), Some("Sprache"));
    }
}
