use std::path::Path;

use serde::{Deserialize, Serialize};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "emsesp-i18n.toml";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Language used by `show`, `get`, `export` and `stats` without `--lang`.
    pub default_language: String,
    /// Reference file for `check` without `--reference`.
    pub reference: Option<String>,
    /// Strict reads and failing checks unless overridden by flags.
    pub strict: bool,
    /// Column width at which `show` truncates values.
    pub truncate_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: emsesp_i18n::localizer::DEFAULT_LANGUAGE.to_string(),
            reference: None,
            strict: false,
            truncate_width: 50,
        }
    }
}

impl Config {
    /// Loads `path`, or `emsesp-i18n.toml` when present, or the defaults.
    ///
    /// An explicitly named file must exist; any file that exists must parse.
    pub fn load(path: Option<&str>) -> Result<Self, String> {
        let (path, required) = match path {
            Some(path) => (Path::new(path), true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };

        if !path.exists() {
            if required {
                return Err(format!("Config file does not exist: {}", path.display()));
            }
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let config = Self::from_toml(&content)
            .map_err(|e| format!("Invalid config {}: {}", path.display(), e))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, String> {
        let config: Config = toml::from_str(content).map_err(|e| e.to_string())?;
        if config.truncate_width == 0 {
            return Err("truncate_width must be greater than 0".to_string());
        }
        Ok(config)
    }
}
