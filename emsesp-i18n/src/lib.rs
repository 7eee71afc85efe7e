#![forbid(unsafe_code)]
//! Locale tables for the EMS-ESP web interface.
//!
//! Ships the Italian translation table and renders its messages: positional
//! and named placeholders (`{0}`, `{num}`) and count-dependent plural blocks
//! (`{{s}}`, `{{uno|molti}}`). Tables can be read from and written to flat
//! JSON, table JSON and CSV, and checked for completeness against a
//! reference language.
//!
//! # Quick Start
//!
//! ```rust
//! use emsesp_i18n::{Args, locales};
//!
//! let it = locales::italian();
//! assert_eq!(it.text("LANGUAGE"), Some("Lingua"));
//! assert_eq!(it.render("NUM_DEVICES", &Args::new().with("num", 3))?, "3 Dispositivi s");
//! assert_eq!(it.list("STATUS_NAMES").map(<[String]>::len), Some(8));
//! # Ok::<(), emsesp_i18n::Error>(())
//! ```
//!
//! # Working with files
//!
//! ```rust,no_run
//! use emsesp_i18n::{Codec, ReadOptions, check_completeness};
//!
//! let mut codec = Codec::builtin();
//! codec.read_file("i18n/en.json", &ReadOptions::new().with_strict(true))?;
//!
//! let report = check_completeness(
//!     codec.get_by_language("it").unwrap(),
//!     codec.get_by_language("en").unwrap(),
//! );
//! println!("missing: {:?}", report.missing);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Supported Formats
//!
//! - **Flat JSON** (`it.json`): key → string or array, plus `$language` and `$pending`
//! - **Table JSON** (`it.table.json`): lossless dump with statuses and comments
//! - **CSV** (`it.csv`): translator worksheet, one row per text or list item

pub mod builder;
pub mod codec;
pub mod error;
pub mod formats;
pub mod locales;
pub mod localizer;
pub mod operations;
pub mod placeholder;
pub mod plural_rules;
pub mod provenance;
pub mod read_options;
pub mod template;
pub mod traits;
pub mod types;
pub mod validation;

// Re-export most used types for easy consumption
pub use crate::{
    builder::{CodecBuilder, LocaleTableBuilder},
    codec::{Codec, convert, convert_with, read_table, write_table},
    error::Error,
    formats::FormatType,
    localizer::Localizer,
    operations::{DiffReport, diff_tables},
    plural_rules::PluralCategory,
    read_options::ReadOptions,
    template::{ArgValue, Args, Template},
    types::{Entry, EntryStatus, LocaleTable, Message, Metadata},
    validation::{CompletenessReport, check_completeness, validate_against},
};
