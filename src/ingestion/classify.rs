//! File type classification.
//!
//! Classification looks only at the declared MIME type and the filename, never at the bytes,
//! because the read mode (text vs. binary) has to be fixed before the read starts.

use crate::types::FileKind;

/// Result of classifying a file by MIME type and filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Csv,
    Text,
    Pdf,
    Unsupported,
}

impl Classification {
    /// The decode path, or `None` for [`Classification::Unsupported`].
    pub fn kind(self) -> Option<FileKind> {
        match self {
            Self::Csv => Some(FileKind::Csv),
            Self::Text => Some(FileKind::Text),
            Self::Pdf => Some(FileKind::Pdf),
            Self::Unsupported => None,
        }
    }
}

impl From<FileKind> for Classification {
    fn from(kind: FileKind) -> Self {
        match kind {
            FileKind::Csv => Self::Csv,
            FileKind::Text => Self::Text,
            FileKind::Pdf => Self::Pdf,
        }
    }
}

/// Classify a file. First match wins:
///
/// 1. MIME `text/csv` or extension `.csv` → [`Classification::Csv`]
/// 2. MIME `text/*` or extension `.txt` → [`Classification::Text`]
/// 3. MIME `application/pdf` or extension `.pdf` → [`Classification::Pdf`]
/// 4. anything else → [`Classification::Unsupported`]
///
/// Extensions are filename suffixes compared case-insensitively. MIME types ignore ASCII case
/// and parameters.
///
/// ```
/// use file_ingest::ingestion::{classify, Classification};
///
/// assert_eq!(classify("application/vnd.ms-excel", "export.CSV"), Classification::Csv);
/// assert_eq!(classify("text/markdown", "notes.md"), Classification::Text);
/// assert_eq!(classify("", "paper.pdf"), Classification::Pdf);
/// assert_eq!(classify("application/octet-stream", "blob.bin"), Classification::Unsupported);
/// ```
pub fn classify(mime_type: &str, name: &str) -> Classification {
    let mime = essence(mime_type);
    let name = name.to_ascii_lowercase();

    if mime == "text/csv" || name.ends_with(".csv") {
        Classification::Csv
    } else if mime.starts_with("text/") || name.ends_with(".txt") {
        Classification::Text
    } else if mime == "application/pdf" || name.ends_with(".pdf") {
        Classification::Pdf
    } else {
        Classification::Unsupported
    }
}

/// MIME type without parameters, lowercased (`Text/CSV; charset=utf-8` → `text/csv`).
fn essence(mime_type: &str) -> String {
    mime_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_extension_wins_over_any_mime() {
        for mime in ["", "text/plain", "application/pdf", "application/octet-stream"] {
            assert_eq!(classify(mime, "data.csv"), Classification::Csv, "mime={mime}");
        }
        assert_eq!(classify("", "DATA.Csv"), Classification::Csv);
    }

    #[test]
    fn text_mime_without_known_extension_is_text() {
        assert_eq!(classify("text/plain", "readme"), Classification::Text);
        assert_eq!(classify("text/html", "index.html"), Classification::Text);
    }

    #[test]
    fn text_mime_beats_pdf_extension() {
        // rule 2 is checked before rule 3
        assert_eq!(classify("text/plain", "odd.pdf"), Classification::Text);
    }

    #[test]
    fn mime_parameters_and_case_are_ignored() {
        assert_eq!(classify("Text/CSV; charset=utf-8", "upload"), Classification::Csv);
        assert_eq!(classify("APPLICATION/PDF", "upload"), Classification::Pdf);
    }

    #[test]
    fn extension_must_be_a_suffix() {
        assert_eq!(classify("", "report.csv.bak"), Classification::Unsupported);
        assert_eq!(classify("", "pdf"), Classification::Unsupported);
    }

    #[test]
    fn unsupported_has_no_kind() {
        assert_eq!(classify("application/octet-stream", "blob").kind(), None);
        assert_eq!(classify("", "a.txt").kind(), Some(FileKind::Text));
    }
}
