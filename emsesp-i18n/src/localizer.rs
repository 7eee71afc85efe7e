//! Language selection and message rendering over a set of tables.
//!
//! ```rust
//! use emsesp_i18n::{Args, Localizer};
//!
//! let localizer = Localizer::builtin();
//! let text = localizer.try_translate("it-CH", "IS_REQUIRED", &Args::positional(["Username"]))?;
//! assert_eq!(text, "Username é richiesto");
//! assert_eq!(localizer.status_name("it", 0), Some("Telegrammi EMS Ricevuti (Rx)"));
//! # Ok::<(), emsesp_i18n::Error>(())
//! ```

use log::warn;

use crate::{
    codec::{Codec, normalize_language},
    error::Error,
    plural_rules::parse_language,
    template::{Args, Template},
    types::{LocaleTable, Message},
};

/// Key of the list holding the telegram statistic names.
pub const STATUS_NAMES_KEY: &str = "STATUS_NAMES";

/// Language used when no other table carries a key.
pub const DEFAULT_LANGUAGE: &str = "it";

#[derive(Debug, Clone)]
pub struct Localizer {
    codec: Codec,
    default_language: String,
}

impl Default for Localizer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Localizer {
    /// Localizer over the built-in tables, defaulting to Italian.
    pub fn builtin() -> Self {
        Self::new(Codec::builtin(), DEFAULT_LANGUAGE)
    }

    pub fn new(codec: Codec, default_language: impl Into<String>) -> Self {
        Localizer {
            codec,
            default_language: default_language.into(),
        }
    }

    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Tables to consult for `language`: exact match, base language, then the
    /// default language. Each table appears once.
    fn candidates(&self, language: &str) -> Vec<&LocaleTable> {
        let requested = parse_language(language);
        let exact = requested.to_string();
        let base = requested.language.as_str().to_string();
        let fallback = normalize_language(&self.default_language);

        let mut candidates: Vec<&LocaleTable> = Vec::with_capacity(3);
        for wanted in [exact, base] {
            if let Some(table) = self
                .codec
                .iter()
                .find(|table| normalize_language(table.language()) == wanted)
            {
                candidates.push(table);
            }
        }
        if let Some(table) = self.codec.get_by_language(&fallback) {
            candidates.push(table);
        }

        let mut unique: Vec<&LocaleTable> = Vec::with_capacity(candidates.len());
        for table in candidates {
            if !unique.iter().any(|seen| std::ptr::eq(*seen, table)) {
                unique.push(table);
            }
        }
        unique
    }

    /// Finds the table and message that answer `key` for `language`.
    pub fn resolve(&self, language: &str, key: &str) -> Option<(&LocaleTable, &Message)> {
        self.candidates(language)
            .into_iter()
            .find_map(|table| table.get(key).map(|message| (table, message)))
    }

    /// Renders `key` for `language`, failing on unknown keys, list messages
    /// and render errors.
    pub fn try_translate(&self, language: &str, key: &str, args: &Args) -> Result<String, Error> {
        let (table, message) = self
            .resolve(language, key)
            .ok_or_else(|| Error::unknown_key(language, key))?;
        match message {
            Message::Text(text) => Template::parse(text)?.render(table.language(), args),
            Message::List(_) => Err(Error::NotText(key.to_string())),
        }
    }

    /// Renders `key` for `language`, never failing.
    ///
    /// Unknown keys yield the key itself; messages that cannot be rendered
    /// yield their raw text (lists are joined with `, `).
    pub fn translate(&self, language: &str, key: &str, args: &Args) -> String {
        let Some((table, message)) = self.resolve(language, key) else {
            warn!("no translation for `{}` in {}", key, language);
            return key.to_string();
        };

        let text = match message {
            Message::Text(text) => text,
            Message::List(items) => {
                warn!("`{}` is a list, not a text", key);
                return items.join(", ");
            }
        };

        match Template::parse(text).and_then(|template| template.render(table.language(), args)) {
            Ok(rendered) => rendered,
            Err(err) => {
                warn!("cannot render `{}` for {}: {}", key, table.language(), err);
                text.clone()
            }
        }
    }

    /// Items of a list message.
    pub fn list(&self, language: &str, key: &str) -> Result<&[String], Error> {
        match self.resolve(language, key) {
            Some((_, Message::List(items))) => Ok(items),
            Some((_, Message::Text(_))) => Err(Error::NotList(key.to_string())),
            None => Err(Error::unknown_key(language, key)),
        }
    }

    /// Name of the telegram statistic at `index`.
    pub fn status_name(&self, language: &str, index: usize) -> Option<&str> {
        self.list(language, STATUS_NAMES_KEY)
            .ok()
            .and_then(|items| items.get(index))
            .map(String::as_str)
    }
}
