//! Helpers for attaching and reading provenance metadata.
//!
//! Provenance is stored in `Metadata::custom` under reserved key names, so the
//! table JSON shape stays the same whether or not provenance is recorded.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::Metadata;

pub const PROVENANCE_PREFIX: &str = "emsesp_i18n.provenance.";
const SOURCE_PATH_KEY: &str = "emsesp_i18n.provenance.source_path";
const SOURCE_FORMAT_KEY: &str = "emsesp_i18n.provenance.source_format";

/// Where a table was loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProvenanceRecord {
    pub source_path: Option<String>,
    pub source_format: Option<String>,
}

impl ProvenanceRecord {
    pub fn is_empty(&self) -> bool {
        self.source_path.is_none() && self.source_format.is_none()
    }
}

/// Writes provenance into table metadata, leaving unset fields untouched.
pub fn set_provenance(metadata: &mut Metadata, provenance: &ProvenanceRecord) {
    apply_to_map(&mut metadata.custom, provenance);
}

/// Reads provenance from table metadata.
pub fn provenance(metadata: &Metadata) -> Option<ProvenanceRecord> {
    let record = ProvenanceRecord {
        source_path: metadata.custom.get(SOURCE_PATH_KEY).cloned(),
        source_format: metadata.custom.get(SOURCE_FORMAT_KEY).cloned(),
    };
    (!record.is_empty()).then_some(record)
}

/// Drops every provenance key, e.g. before comparing tables from different files.
pub fn strip_provenance(metadata: &mut Metadata) {
    metadata
        .custom
        .retain(|key, _| !key.starts_with(PROVENANCE_PREFIX));
}

fn apply_to_map(map: &mut BTreeMap<String, String>, provenance: &ProvenanceRecord) {
    if let Some(path) = &provenance.source_path {
        map.insert(SOURCE_PATH_KEY.to_string(), path.clone());
    }
    if let Some(format) = &provenance.source_format {
        map.insert(SOURCE_FORMAT_KEY.to_string(), format.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_through_metadata() {
        let mut metadata = Metadata::new("it");
        assert!(provenance(&metadata).is_none());

        let record = ProvenanceRecord {
            source_path: Some("i18n/it.json".to_string()),
            source_format: Some("json".to_string()),
        };
        set_provenance(&mut metadata, &record);
        assert_eq!(provenance(&metadata), Some(record));
    }

    #[test]
    fn test_strip_keeps_other_custom_fields() {
        let mut metadata = Metadata::new("it");
        metadata
            .custom
            .insert("format".to_string(), "json".to_string());
        set_provenance(
            &mut metadata,
            &ProvenanceRecord {
                source_path: Some("x".to_string()),
                source_format: None,
            },
        );

        strip_provenance(&mut metadata);
        assert!(provenance(&metadata).is_none());
        assert_eq!(metadata.custom.len(), 1);
    }
}
