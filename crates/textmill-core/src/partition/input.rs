//! Document input: a file path or an open stream, never both
//!
//! The two sources are mutually exclusive; a value carrying both or
//! neither is rejected at partition time with an input-validation error
//! rather than silently picking a default.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Input to one partition call
#[derive(Default)]
pub struct DocumentInput {
    path: Option<PathBuf>,
    stream: Option<Box<dyn Read>>,
    stream_modified: Option<String>,
}

impl DocumentInput {
    /// Input read from a filesystem path
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Input read from an open byte stream
    pub fn from_stream(reader: impl Read + 'static) -> Self {
        Self {
            stream: Some(Box::new(reader)),
            ..Self::default()
        }
    }

    /// Set a filesystem path on an existing value
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set an open stream on an existing value
    pub fn with_stream(mut self, reader: impl Read + 'static) -> Self {
        self.stream = Some(Box::new(reader));
        self
    }

    /// Record the modification time the stream's underlying resource
    /// exposes, if any (ISO-8601)
    pub fn with_stream_modified(mut self, timestamp: impl Into<String>) -> Self {
        self.stream_modified = Some(timestamp.into());
        self
    }

    /// Path carried by this input, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Enforce the path-xor-stream contract
    pub(crate) fn validate(self) -> Result<ResolvedInput> {
        match (self.path, self.stream) {
            (Some(path), None) => Ok(ResolvedInput::Path(path)),
            (None, Some(reader)) => Ok(ResolvedInput::Stream {
                reader,
                modified: self.stream_modified,
            }),
            (Some(_), Some(_)) => Err(Error::invalid_input(
                "supply exactly one of path or stream, not both",
            )),
            (None, None) => Err(Error::invalid_input(
                "supply exactly one of path or stream; neither was given",
            )),
        }
    }
}

impl std::fmt::Debug for DocumentInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentInput")
            .field("path", &self.path)
            .field("stream", &self.stream.is_some())
            .field("stream_modified", &self.stream_modified)
            .finish()
    }
}

/// A validated input, ready for byte acquisition
pub(crate) enum ResolvedInput {
    Path(PathBuf),
    Stream {
        reader: Box<dyn Read>,
        modified: Option<String>,
    },
}

impl ResolvedInput {
    /// Read the full byte content. Path-based input opens and closes the
    /// file within this call; stream input is consumed to EOF and left at
    /// a consistent position on every exit path.
    pub(crate) fn read_bytes(self) -> Result<(Vec<u8>, Option<PathBuf>, Option<String>)> {
        match self {
            Self::Path(path) => {
                let bytes = std::fs::read(&path)?;
                Ok((bytes, Some(path), None))
            }
            Self::Stream {
                mut reader,
                modified,
            } => {
                let mut bytes = Vec::new();
                reader.read_to_end(&mut bytes)?;
                Ok((bytes, None, modified))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_path_only_validates() {
        let input = DocumentInput::from_path("factbook.xml");
        assert!(matches!(input.validate(), Ok(ResolvedInput::Path(_))));
    }

    #[test]
    fn test_stream_only_validates() {
        let input = DocumentInput::from_stream(Cursor::new(b"<doc/>".to_vec()));
        assert!(matches!(input.validate(), Ok(ResolvedInput::Stream { .. })));
    }

    #[test]
    fn test_both_sources_rejected() {
        let input = DocumentInput::from_path("factbook.xml")
            .with_stream(Cursor::new(b"<doc/>".to_vec()));
        assert!(matches!(input.validate(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_neither_source_rejected() {
        let input = DocumentInput::default();
        assert!(matches!(input.validate(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_stream_bytes_read_to_eof() {
        let input = DocumentInput::from_stream(Cursor::new(b"<doc>x</doc>".to_vec()));
        let (bytes, path, modified) = input.validate().unwrap().read_bytes().unwrap();

        assert_eq!(bytes, b"<doc>x</doc>");
        assert!(path.is_none());
        assert!(modified.is_none());
    }

    #[test]
    fn test_missing_path_is_an_io_error() {
        let input = DocumentInput::from_path("/definitely/not/here.xml");
        let err = input.validate().unwrap().read_bytes().unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
