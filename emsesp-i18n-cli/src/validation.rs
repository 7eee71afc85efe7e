use emsesp_i18n::formats::FormatType;
use std::path::Path;
use unic_langid::LanguageIdentifier;

/// Validate file path exists and is readable
pub fn validate_file_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        return Err(format!("File does not exist: {}", path));
    }

    if !path_obj.is_file() {
        return Err(format!("Path is not a file: {}", path));
    }

    Ok(())
}

/// Validate output directory exists or can be created
pub fn validate_output_path(path: &str) -> Result<(), String> {
    if path.trim().is_empty() {
        return Err("Output path cannot be empty".to_string());
    }

    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Cannot create output directory: {}", e))?;
    }

    Ok(())
}

/// Validate language code format using unic-langid (same as lib crate)
pub fn validate_language_code(lang: &str) -> Result<(), String> {
    if lang.trim().is_empty() {
        return Err("Language code cannot be empty".to_string());
    }

    let lang_id = lang
        .replace('_', "-")
        .parse::<LanguageIdentifier>()
        .map_err(|_| {
            format!(
                "Invalid language code format: {}. Expected valid BCP 47 language identifier",
                lang
            )
        })?;

    if !(2..=3).contains(&lang_id.language.as_str().len()) {
        return Err(format!(
            "Invalid language code format: {}. Expected a 2 or 3 letter language subtag",
            lang
        ));
    }

    Ok(())
}

/// Parse a format name given on the command line
pub fn parse_format(format: &str) -> Result<FormatType, String> {
    format.parse::<FormatType>().map_err(|_| {
        format!(
            "Unsupported format: {}. Supported formats: {}",
            format,
            FormatType::names().join(", ")
        )
    })
}

/// Format given explicitly, or inferred from the file name
pub fn resolve_format(explicit: Option<&str>, path: &str) -> Result<FormatType, String> {
    match explicit {
        Some(format) => parse_format(format),
        None => FormatType::from_path(path).ok_or_else(|| {
            format!(
                "Cannot infer format of {}. Pass it explicitly ({})",
                path,
                FormatType::names().join(", ")
            )
        }),
    }
}
