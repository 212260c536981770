//! Reading a [`SelectedFile`] in a fixed [`ReadMode`].

use crate::error::{IngestError, IngestResult};
use crate::types::{FileContents, FileSource, ReadMode, SelectedFile};

const UTF8_BOM: &str = "\u{feff}";

/// Read the file's contents. This is the only suspension point of an ingestion attempt.
///
/// Text mode decodes UTF-8, replacing invalid sequences with U+FFFD and dropping a leading
/// byte order mark. Binary mode returns the bytes untouched.
pub async fn read_file(file: &SelectedFile, mode: ReadMode) -> IngestResult<FileContents> {
    let bytes = match &file.source {
        FileSource::Path(path) => tokio::fs::read(path).await.map_err(|source| IngestError::ReadFailure {
            name: file.name.clone(),
            source,
        })?,
        FileSource::Memory(bytes) => bytes.clone(),
    };

    tracing::debug!(name = %file.name, bytes = bytes.len(), ?mode, "file read");

    Ok(match mode {
        ReadMode::Binary => FileContents::Binary(bytes),
        ReadMode::Text => FileContents::Text(decode_text(bytes)),
    })
}

fn decode_text(bytes: Vec<u8>) -> String {
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    };
    match text.strip_prefix(UTF8_BOM) {
        Some(rest) => rest.to_owned(),
        None => text,
    }
}
