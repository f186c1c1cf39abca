//! Partitioning options

use serde::{Deserialize, Serialize};

/// Options controlling a single partition call
///
/// One value applies to one document; the same value may be reused across
/// documents since nothing in it is mutated by the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionOptions {
    /// Declared source encoding label (e.g. "utf-8", "utf-16"). When set,
    /// decoding is strict and mismatched bytes fail the call. When unset,
    /// the byte-order mark is sniffed and decoding falls back to permissive
    /// UTF-8.
    pub encoding: Option<String>,
    /// Retain literal tag markup in element text instead of stripped text
    pub preserve_tags: bool,
    /// Keep structurally-insignificant wrapper nodes in the node tree.
    /// When false, adapters may flatten wrappers that carry no text.
    pub keep_original_structure: bool,
    /// Stamp resolved metadata onto emitted elements. When false every
    /// element carries the empty metadata record.
    pub include_metadata: bool,
    /// Display filename override; wins over any path-derived name
    pub metadata_filename: Option<String>,
    /// Last-modified override (ISO-8601); wins over any computed timestamp
    pub metadata_last_modified: Option<String>,
}

impl Default for PartitionOptions {
    fn default() -> Self {
        Self {
            encoding: None,
            preserve_tags: false,
            keep_original_structure: false,
            include_metadata: true,
            metadata_filename: None,
            metadata_last_modified: None,
        }
    }
}

impl PartitionOptions {
    /// Set the declared source encoding
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    /// Enable or disable tag preservation
    pub fn with_preserve_tags(mut self, preserve: bool) -> Self {
        self.preserve_tags = preserve;
        self
    }

    /// Enable or disable metadata emission
    pub fn with_include_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }

    /// Set the display filename override
    pub fn with_metadata_filename(mut self, filename: impl Into<String>) -> Self {
        self.metadata_filename = Some(filename.into());
        self
    }

    /// Set the last-modified override
    pub fn with_metadata_last_modified(mut self, timestamp: impl Into<String>) -> Self {
        self.metadata_last_modified = Some(timestamp.into());
        self
    }
}
