//! CLI library for testing purposes

pub mod config;
pub mod path_glob;
pub mod validation;

pub use config::Config;
pub use emsesp_i18n::Codec;
