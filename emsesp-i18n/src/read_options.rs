//! Options for controlled file reading into [`crate::LocaleTable`].

/// Read behavior options for [`crate::Codec`] file-loading APIs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReadOptions {
    /// Language applied to the loaded table, overriding whatever the file or
    /// its path says.
    pub language_hint: Option<String>,
    /// Requires a determinable language and logs pending entries.
    pub strict: bool,
    /// Whether to record the source path and format in `metadata.custom`.
    pub attach_provenance: bool,
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language_hint(mut self, language_hint: Option<String>) -> Self {
        self.language_hint = language_hint;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_provenance(mut self, attach_provenance: bool) -> Self {
        self.attach_provenance = attach_provenance;
        self
    }
}
