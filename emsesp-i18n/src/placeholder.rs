//! Placeholder signatures for comparing messages across languages.
//!
//! Translations may reorder arguments or choose different plural wording, but
//! they must reference the same set of arguments as the reference text.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::{error::Error, template::Template};

/// What a message text expects from its caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlaceholderSignature {
    /// Argument names used by placeholders and plural blocks.
    pub arguments: BTreeSet<String>,
    pub plural_blocks: usize,
}

impl PlaceholderSignature {
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty() && self.plural_blocks == 0
    }

    /// Whether both sides expect the same arguments.
    pub fn is_compatible_with(&self, other: &PlaceholderSignature) -> bool {
        self.arguments == other.arguments
    }
}

/// Builds the signature of a message text.
pub fn signature(input: &str) -> Result<PlaceholderSignature, Error> {
    let template = Template::parse(input)?;
    Ok(PlaceholderSignature {
        arguments: template
            .argument_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        plural_blocks: template.plural_blocks().count(),
    })
}

/// Argument names of a message text in order of first use.
pub fn extract_arguments(input: &str) -> Result<Vec<String>, Error> {
    let template = Template::parse(input)?;
    Ok(template
        .argument_names()
        .into_iter()
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_of_plain_text() {
        let sig = signature("Pannello di Controllo").unwrap();
        assert!(sig.is_empty());
    }

    #[test]
    fn test_signature_counts_plural_blocks() {
        let sig = signature("{num} Dispositivi {{s}}").unwrap();
        assert_eq!(sig.arguments, ["num".to_string()].into_iter().collect());
        assert_eq!(sig.plural_blocks, 1);
    }

    #[test]
    fn test_reordered_arguments_are_compatible() {
        let en = signature("{a} of {b}").unwrap();
        let it = signature("{b} di {a}").unwrap();
        assert!(en.is_compatible_with(&it));

        let missing = signature("{a}").unwrap();
        assert!(!en.is_compatible_with(&missing));
    }

    #[test]
    fn test_extract_arguments_order() {
        assert_eq!(
            extract_arguments("{name} ha {num} {{s}}").unwrap(),
            vec!["name", "num"]
        );
    }

    #[test]
    fn test_malformed_template() {
        assert!(signature("{{a|b|c|d}}").is_err());
    }
}
