//! textmill-core: partitions markup documents into typed content elements
//!
//! This crate is the partitioning core of textmill. It decodes raw document
//! bytes, builds a normalized node tree per source format (XML, Markdown,
//! HTML), classifies the tree in document order into semantic elements, and
//! stamps each element with provenance metadata. Connectors that fetch
//! documents from external systems, CLI surfaces, and output rendering all
//! live outside this crate.

pub mod config;
pub mod encoding;
pub mod error;
pub mod partition;
pub mod types;

mod adapters;
mod classify;
mod tree;

pub use config::PartitionOptions;
pub use error::{Error, Result};
pub use partition::{
    partition_html, partition_markdown, partition_xml, DocumentInput, FsLastModified,
    LastModifiedSource, Partitioner, SourceFormat,
};
pub use types::{Element, ElementKind, ElementMetadata};
