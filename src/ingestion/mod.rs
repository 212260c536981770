//! Ingestion entrypoints and implementations.
//!
//! Most callers should use [`ingest`] (from [`unified`]) which:
//!
//! - classifies the file by MIME type and filename (or you can override via [`IngestOptions`])
//! - reads it as text or raw bytes, depending on the classification
//! - decodes it into an [`crate::types::Ingested`] value
//! - optionally reports success/failure/alerts to an [`IngestObserver`]
//!
//! Format-specific functions are also available under:
//! - [`csv`]
//! - [`text`]
//! - [`pdf`]

pub mod classify;
pub mod csv;
pub mod observability;
pub mod pdf;
pub mod source;
pub mod text;
pub mod unified;

pub use classify::{classify, Classification};
pub use self::csv::CsvOptions;
pub use observability::{
    CompositeObserver, FileObserver, IngestContext, IngestObserver, IngestSeverity, IngestStats, TracingObserver,
};
pub use source::read_file;
pub use unified::{decode, ingest, IngestOptions, IngestRequest};
