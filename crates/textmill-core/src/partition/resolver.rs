//! Metadata resolution
//!
//! Builds the single metadata template stamped onto every element of a
//! document. Precedence is strict and uniform across formats: explicit
//! caller overrides always win over anything computed from the input, and
//! the last-modified lookup goes through an injected capability so tests
//! substitute it without touching global state.

use std::path::Path;
use std::time::SystemTime;

use crate::config::PartitionOptions;
use crate::types::ElementMetadata;

/// Capability answering "when was this source last modified?"
///
/// The filesystem implementation is the default; tests inject fixed
/// values instead of patching lookup functions.
pub trait LastModifiedSource {
    /// Modification time for a path-based input (ISO-8601), if known
    fn for_path(&self, path: &Path) -> Option<String>;

    /// Modification time for a stream-based input. `exposed` is whatever
    /// timestamp the stream's underlying resource carries; absent means
    /// the resource exposes none.
    fn for_stream(&self, exposed: Option<&str>) -> Option<String> {
        exposed.map(str::to_string)
    }
}

/// Filesystem-backed source: asks the OS for the file's mtime
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLastModified;

impl LastModifiedSource for FsLastModified {
    fn for_path(&self, path: &Path) -> Option<String> {
        let modified = std::fs::metadata(path).ok()?.modified().ok()?;
        Some(format_timestamp(modified))
    }
}

/// Format a system time as a local ISO-8601 string without offset
fn format_timestamp(time: SystemTime) -> String {
    chrono::DateTime::<chrono::Local>::from(time)
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}

/// Build the per-document metadata template
///
/// Always runs, even when metadata emission is disabled; the orchestrator
/// decides at stamping time whether to use the template or the empty
/// record.
pub(crate) fn resolve_metadata(
    filetype: &str,
    path: Option<&Path>,
    stream_modified: Option<&str>,
    options: &PartitionOptions,
    last_modified_source: &dyn LastModifiedSource,
) -> ElementMetadata {
    let named = options
        .metadata_filename
        .as_deref()
        .map(Path::new)
        .or(path);
    let (filename, file_directory) = match named {
        Some(name) => split_display_name(name),
        None => (None, None),
    };

    let last_modified = options.metadata_last_modified.clone().or_else(|| match path {
        Some(path) => last_modified_source.for_path(path),
        None => last_modified_source.for_stream(stream_modified),
    });

    ElementMetadata {
        filename,
        file_directory,
        filetype: Some(filetype.to_string()),
        last_modified,
    }
}

/// Split a display name into basename and directory, dropping empty parts
fn split_display_name(name: &Path) -> (Option<String>, Option<String>) {
    let filename = name
        .file_name()
        .map(|f| f.to_string_lossy().into_owned());
    let directory = name
        .parent()
        .map(|d| d.to_string_lossy().into_owned())
        .filter(|d| !d.is_empty());
    (filename, directory)
}
