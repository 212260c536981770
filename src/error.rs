use thiserror::Error;

use crate::types::FileKind;

/// Convenience result type for ingestion operations.
pub type IngestResult<T> = Result<T, IngestError>;

/// Error type returned by ingestion functions.
///
/// Every variant is terminal for the attempt that produced it; nothing is retried.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The file picker produced no file.
    #[error("no file selected")]
    NoFileSelected,

    /// Neither the declared MIME type nor the filename extension maps to a supported format.
    #[error("unsupported file type '{mime_type}' for file '{name}'")]
    UnsupportedType { name: String, mime_type: String },

    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("failed to read file '{name}': {source}")]
    ReadFailure {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// The content was read but the decoder for `kind` rejected it.
    #[error("failed to parse {kind} file '{name}': {message}")]
    ParseFailure {
        name: String,
        kind: FileKind,
        message: String,
    },
}

impl IngestError {
    /// Short message suitable for an error banner shown in place of results.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NoFileSelected => "No file selected",
            Self::UnsupportedType { .. } => "Unsupported file type",
            Self::ReadFailure { .. } => "Error reading file",
            Self::ParseFailure {
                kind: FileKind::Csv,
                ..
            } => "Error parsing CSV",
            Self::ParseFailure {
                kind: FileKind::Pdf,
                ..
            } => "Error parsing PDF",
            Self::ParseFailure { .. } => "Error parsing file",
        }
    }

    pub(crate) fn parse(name: &str, kind: FileKind, message: impl Into<String>) -> Self {
        Self::ParseFailure {
            name: name.to_owned(),
            kind,
            message: message.into(),
        }
    }
}
