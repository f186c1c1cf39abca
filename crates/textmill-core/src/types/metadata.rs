//! Provenance metadata attached to elements

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Provenance metadata for one element
///
/// The resolver builds exactly one record per document; the orchestrator
/// clones it onto every element of that document. All fields are optional
/// and the default value is the empty record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementMetadata {
    /// Display name attributed to the source; independent of the physical
    /// path the bytes were read from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Directory portion of a path-derived name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_directory: Option<String>,
    /// MIME-like format identifier, constant across one document's elements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filetype: Option<String>,
    /// Source modification time as an ISO-8601 string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
}

impl ElementMetadata {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.filename.is_none()
            && self.file_directory.is_none()
            && self.filetype.is_none()
            && self.last_modified.is_none()
    }

    /// Export set fields as an ordered map; the empty record yields an
    /// empty map
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        if let Some(filename) = &self.filename {
            map.insert("filename".to_string(), filename.clone());
        }
        if let Some(dir) = &self.file_directory {
            map.insert("file_directory".to_string(), dir.clone());
        }
        if let Some(filetype) = &self.filetype {
            map.insert("filetype".to_string(), filetype.clone());
        }
        if let Some(modified) = &self.last_modified {
            map.insert("last_modified".to_string(), modified.clone());
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_empty() {
        let metadata = ElementMetadata::default();
        assert!(metadata.is_empty());
        assert!(metadata.to_map().is_empty());
    }

    #[test]
    fn test_to_map_omits_unset_fields() {
        let metadata = ElementMetadata {
            filename: Some("factbook.xml".to_string()),
            filetype: Some("application/xml".to_string()),
            ..ElementMetadata::default()
        };

        let map = metadata.to_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("filename").unwrap(), "factbook.xml");
        assert!(!map.contains_key("last_modified"));
    }

    #[test]
    fn test_unset_fields_skipped_in_json() {
        let metadata = ElementMetadata {
            filetype: Some("text/markdown".to_string()),
            ..ElementMetadata::default()
        };

        let json = serde_json::to_string(&metadata).unwrap();
        assert_eq!(json, "{\"filetype\":\"text/markdown\"}");
    }
}
