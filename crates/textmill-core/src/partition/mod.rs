//! Partition orchestration
//!
//! The per-format entry points. This is the only module that knows which
//! adapter serves which format; callers never touch adapters directly.
//! Each call is strictly linear: validate input, read bytes, decode,
//! build the node tree, classify, stamp metadata.

mod input;
mod resolver;

pub use input::DocumentInput;
pub use resolver::{FsLastModified, LastModifiedSource};

use serde::{Deserialize, Serialize};

use crate::adapters;
use crate::classify::classify;
use crate::config::PartitionOptions;
use crate::encoding::decode_text;
use crate::error::{Error, Result};
use crate::tree::Node;
use crate::types::{Element, ElementMetadata};

/// Supported source formats
///
/// A closed set: adapter dispatch is a compile-time match, not runtime
/// registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// XML document
    Xml,
    /// Markdown document, lowered to markup before classification
    Markdown,
    /// HTML document
    Html,
}

impl SourceFormat {
    /// MIME-like identifier stamped into element metadata
    pub fn filetype(&self) -> &'static str {
        match self {
            Self::Xml => "application/xml",
            Self::Markdown => "text/markdown",
            Self::Html => "text/html",
        }
    }

    /// Detect format from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "xml" => Some(Self::Xml),
            "md" | "markdown" => Some(Self::Markdown),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }

    /// Adapter function for this format
    fn adapter(&self) -> fn(&str, &PartitionOptions) -> Result<Vec<Node>> {
        match self {
            Self::Xml => adapters::xml::parse_xml,
            Self::Markdown => adapters::markdown::parse_markdown,
            Self::Html => adapters::html::parse_html,
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Xml => write!(f, "xml"),
            Self::Markdown => write!(f, "markdown"),
            Self::Html => write!(f, "html"),
        }
    }
}

/// Partition driver holding the injected last-modified capability
pub struct Partitioner {
    last_modified: Box<dyn LastModifiedSource>,
}

impl Default for Partitioner {
    fn default() -> Self {
        Self {
            last_modified: Box::new(FsLastModified),
        }
    }
}

impl Partitioner {
    /// Create a partitioner with the filesystem last-modified source
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a partitioner with a custom last-modified source
    pub fn with_last_modified_source(source: Box<dyn LastModifiedSource>) -> Self {
        Self {
            last_modified: source,
        }
    }

    /// Partition one document of the given format
    pub fn partition(
        &self,
        format: SourceFormat,
        input: DocumentInput,
        options: &PartitionOptions,
    ) -> Result<Vec<Element>> {
        let (bytes, path, stream_modified) = input.validate()?.read_bytes()?;
        tracing::debug!(%format, bytes = bytes.len(), "partitioning document");

        let text = decode_text(&bytes, options.encoding.as_deref())?;
        let tree = (format.adapter())(&text, options)?;
        let elements = classify(&tree, options);
        drop(tree);

        // The resolver always runs; emission is decided at stamping time.
        let template = resolver::resolve_metadata(
            format.filetype(),
            path.as_deref(),
            stream_modified.as_deref(),
            options,
            self.last_modified.as_ref(),
        );
        tracing::debug!(%format, elements = elements.len(), "document partitioned");

        let stamped = elements
            .into_iter()
            .map(|element| {
                if options.include_metadata {
                    element.with_metadata(template.clone())
                } else {
                    element.with_metadata(ElementMetadata::default())
                }
            })
            .collect();
        Ok(stamped)
    }

    /// Partition an XML document
    pub fn partition_xml(
        &self,
        input: DocumentInput,
        options: &PartitionOptions,
    ) -> Result<Vec<Element>> {
        self.partition(SourceFormat::Xml, input, options)
    }

    /// Partition a Markdown document
    pub fn partition_markdown(
        &self,
        input: DocumentInput,
        options: &PartitionOptions,
    ) -> Result<Vec<Element>> {
        self.partition(SourceFormat::Markdown, input, options)
    }

    /// Partition an HTML document
    pub fn partition_html(
        &self,
        input: DocumentInput,
        options: &PartitionOptions,
    ) -> Result<Vec<Element>> {
        self.partition(SourceFormat::Html, input, options)
    }

    /// Partition a path-based document, detecting the format from its
    /// extension
    pub fn partition_path(
        &self,
        path: impl Into<std::path::PathBuf>,
        options: &PartitionOptions,
    ) -> Result<Vec<Element>> {
        let path = path.into();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        let format = SourceFormat::from_extension(&extension).ok_or_else(|| {
            Error::invalid_input(format!("unsupported file extension '{extension}'"))
        })?;
        self.partition(format, DocumentInput::from_path(path), options)
    }
}

/// Partition an XML document with the default partitioner
pub fn partition_xml(input: DocumentInput, options: &PartitionOptions) -> Result<Vec<Element>> {
    Partitioner::new().partition_xml(input, options)
}

/// Partition a Markdown document with the default partitioner
pub fn partition_markdown(
    input: DocumentInput,
    options: &PartitionOptions,
) -> Result<Vec<Element>> {
    Partitioner::new().partition_markdown(input, options)
}

/// Partition an HTML document with the default partitioner
pub fn partition_html(input: DocumentInput, options: &PartitionOptions) -> Result<Vec<Element>> {
    Partitioner::new().partition_html(input, options)
}
