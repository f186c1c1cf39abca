//! Typed content elements emitted by the classifier

use serde::{Deserialize, Serialize};

use super::metadata::ElementMetadata;

/// Semantic category of an extracted element
///
/// The set is format-independent and closed; new categories are added as
/// variants, never per-format subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Heading-level content
    Title,
    /// Prose with sentence structure
    NarrativeText,
    /// One item of a bulleted or numbered list
    ListItem,
    /// Flattened tabular content
    Table,
    /// Postal-address-shaped text
    Address,
    /// Text content that matched no other category
    UncategorizedText,
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Title => write!(f, "Title"),
            Self::NarrativeText => write!(f, "NarrativeText"),
            Self::ListItem => write!(f, "ListItem"),
            Self::Table => write!(f, "Table"),
            Self::Address => write!(f, "Address"),
            Self::UncategorizedText => write!(f, "UncategorizedText"),
        }
    }
}

/// One unit of extracted content
///
/// Equality is value-based on `(kind, text)` only; metadata is excluded so
/// content-focused assertions compare equal across provenance differences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    /// Semantic category
    pub kind: ElementKind,
    /// Normalized text, or the literal tag-wrapped substring in
    /// tag-preservation mode
    pub text: String,
    /// Provenance metadata; the empty record when emission is disabled
    #[serde(default)]
    pub metadata: ElementMetadata,
}

impl Element {
    /// Create an element with empty metadata
    pub fn new(kind: ElementKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            metadata: ElementMetadata::default(),
        }
    }

    /// Replace the metadata record
    pub fn with_metadata(mut self, metadata: ElementMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

impl Eq for Element {}
