//! Core data model types for ingestion.
//!
//! A host builds a [`SelectedFile`] from its file picker, ingestion turns it into an
//! [`Ingested`] value, and the [`Outcome`] of the latest attempt is what a view renders.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::IngestError;

/// Decode path chosen for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Comma-separated values.
    Csv,
    /// Any `text/*` content or `.txt` file.
    Text,
    /// Portable Document Format.
    Pdf,
}

impl FileKind {
    /// How the bytes must be read for this kind. Must be known before the read starts.
    pub fn read_mode(self) -> ReadMode {
        match self {
            Self::Pdf => ReadMode::Binary,
            Self::Csv | Self::Text => ReadMode::Text,
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Csv => "csv",
            Self::Text => "text",
            Self::Pdf => "pdf",
        })
    }
}

/// Read mode for a [`SelectedFile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    /// Decode bytes as UTF-8 text.
    Text,
    /// Keep raw bytes.
    Binary,
}

/// Contents produced by reading a file in a given [`ReadMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContents {
    Text(String),
    Binary(Vec<u8>),
}

impl FileContents {
    /// Size of the contents in bytes.
    pub fn len(&self) -> usize {
        match self {
            Self::Text(s) => s.len(),
            Self::Binary(b) => b.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Where a selected file's bytes live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// A file on the local filesystem.
    Path(PathBuf),
    /// Bytes already held by the host (e.g. an upload buffer).
    Memory(Vec<u8>),
}

/// A single user-selected file: declared MIME type, filename, and a content source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Filename as shown by the picker (no directory components required).
    pub name: String,
    /// Declared MIME type; may be empty when the host could not determine one.
    pub mime_type: String,
    /// Content source.
    pub source: FileSource,
}

impl SelectedFile {
    /// Create a selected file backed by in-memory bytes.
    pub fn in_memory(name: impl Into<String>, mime_type: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            source: FileSource::Memory(bytes.into()),
        }
    }

    /// Create a selected file backed by a filesystem path.
    ///
    /// The filename is taken from the last path component.
    pub fn from_path(path: impl AsRef<Path>, mime_type: impl Into<String>) -> Self {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name,
            mime_type: mime_type.into(),
            source: FileSource::Path(path.to_path_buf()),
        }
    }
}

/// Decoded result of a successful ingestion.
///
/// Serializes as `{"type": "csv" | "text" | "pdf", "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum Ingested {
    /// Every CSV record in file order. The first row is not treated specially here.
    #[serde(rename = "csv")]
    Csv { rows: Vec<Vec<String>> },
    /// Decoded text, unmodified.
    #[serde(rename = "text")]
    Text { content: String },
    /// Text extracted from a PDF, one line per page.
    #[serde(rename = "pdf")]
    PdfText { content: String },
}

impl Ingested {
    /// The decode path that produced this value.
    pub fn kind(&self) -> FileKind {
        match self {
            Self::Csv { .. } => FileKind::Csv,
            Self::Text { .. } => FileKind::Text,
            Self::PdfText { .. } => FileKind::Pdf,
        }
    }

    /// Number of CSV rows, or lines of text.
    pub fn row_count(&self) -> usize {
        match self {
            Self::Csv { rows } => rows.len(),
            Self::Text { content } | Self::PdfText { content } => content.lines().count(),
        }
    }
}

/// State of the most recent ingestion attempt.
///
/// A single value replaces a separate result slot and error slot, so a stale error can never
/// be shown next to a fresh result.
#[derive(Debug, Default)]
pub enum Outcome {
    /// Nothing selected yet.
    #[default]
    Idle,
    /// A read is in flight for the named file.
    Pending { name: String },
    /// The latest attempt succeeded.
    Loaded(Ingested),
    /// The latest attempt failed.
    Failed(IngestError),
}

impl Outcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// The decoded result, if the latest attempt succeeded.
    pub fn result(&self) -> Option<&Ingested> {
        match self {
            Self::Loaded(ingested) => Some(ingested),
            _ => None,
        }
    }

    /// The error, if the latest attempt failed.
    pub fn error(&self) -> Option<&IngestError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<Result<Ingested, IngestError>> for Outcome {
    fn from(result: Result<Ingested, IngestError>) -> Self {
        match result {
            Ok(ingested) => Self::Loaded(ingested),
            Err(err) => Self::Failed(err),
        }
    }
}
