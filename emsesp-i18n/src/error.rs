//! All error types for the emsesp-i18n crate.
//!
//! These are returned from all fallible operations (table construction,
//! rendering, parsing, serialization, validation).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown format `{0}`")]
    UnknownFormat(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid resource: {0}")]
    InvalidResource(String),

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("duplicate key `{0}`")]
    DuplicateKey(String),

    #[error("invalid key `{0}`")]
    InvalidKey(String),

    #[error("unknown key `{key}` for language `{language}`")]
    UnknownKey { language: String, key: String },

    #[error("message `{0}` is a list, not a text")]
    NotText(String),

    #[error("message `{0}` is a text, not a list")]
    NotList(String),

    #[error("invalid template: {0}")]
    InvalidTemplate(String),

    #[error("missing argument `{0}`")]
    MissingArgument(String),

    #[error("argument `{name}` is not numeric: `{value}`")]
    NotNumeric { name: String, value: String },

    #[error("invalid language code `{0}`")]
    InvalidLanguage(String),

    #[error("validation error: {0}")]
    Validation(String),
}

impl Error {
    /// Creates a new unknown-key error.
    pub fn unknown_key(language: impl Into<String>, key: impl Into<String>) -> Self {
        Error::UnknownKey {
            language: language.into(),
            key: key.into(),
        }
    }

    /// Creates a new invalid-resource error.
    pub fn invalid_resource(message: impl Into<String>) -> Self {
        Error::InvalidResource(message.into())
    }

    /// Creates a new validation error
    pub fn validation_error(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }
}
