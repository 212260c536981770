//! `file-ingest` is the core of a single-file upload widget: it takes the file a user picked,
//! classifies it as CSV, plain text, or PDF, decodes it, and turns the result into a view.
//!
//! The primary entrypoint is [`ingestion::ingest`], which infers the decode path from the
//! declared MIME type and filename (or you can force one via [`ingestion::IngestOptions`]).
//! [`ingestor::FileIngestor`] wraps it in the state a widget needs.
//!
//! ## Classification (first match wins)
//!
//! 1. MIME `text/csv` or a `.csv` filename → CSV
//! 2. MIME `text/*` or a `.txt` filename → plain text
//! 3. MIME `application/pdf` or a `.pdf` filename → PDF
//! 4. anything else → [`IngestError::UnsupportedType`]
//!
//! PDFs are read as raw bytes; everything else is read as UTF-8 text.
//!
//! ## Results
//!
//! - CSV becomes [`types::Ingested::Csv`]: every record as a row of strings (no header handling).
//! - Text becomes [`types::Ingested::Text`], unmodified.
//! - PDF becomes [`types::Ingested::PdfText`]: text runs joined with a space within a page,
//!   pages joined with a newline.
//!
//! ## Quick example
//!
//! ```
//! use file_ingest::ingestor::FileIngestor;
//! use file_ingest::types::SelectedFile;
//! use file_ingest::view::View;
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # rt.block_on(async {
//! let mut widget = FileIngestor::default();
//! widget
//!     .select(Some(SelectedFile::in_memory("t.csv", "", "a,b\n1,2\n3,4")))
//!     .await;
//!
//! match widget.view() {
//!     View::Table { header, body } => {
//!         assert_eq!(header, vec!["a", "b"]);
//!         assert_eq!(body.len(), 2);
//!     }
//!     other => panic!("unexpected view: {other:?}"),
//! }
//! # });
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: classification, reading, and format-specific decoders
//! - [`ingestor`]: the widget state machine
//! - [`view`]: rendering of outcomes
//! - [`types`]: selected files, results, outcomes
//! - [`error`]: error types used across ingestion

pub mod error;
pub mod ingestion;
pub mod ingestor;
pub mod types;
pub mod view;

pub use error::{IngestError, IngestResult};
