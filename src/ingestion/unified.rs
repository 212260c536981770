//! Unified ingestion entrypoint.
//!
//! Most callers should use [`ingest`], which classifies a [`SelectedFile`], reads it in the
//! matching mode, and decodes it into an [`Ingested`] value.
//!
//! - If [`IngestOptions::kind`] is `None`, the decode path is inferred from the declared MIME
//!   type and filename (see [`super::classify()`]).
//! - If an [`super::observability::IngestObserver`] is provided, success/failure/alerts are
//!   reported to it.

use std::fmt;
use std::sync::Arc;

use crate::error::{IngestError, IngestResult};
use crate::types::{FileContents, FileKind, Ingested, SelectedFile};

use super::classify::classify;
use super::csv::CsvOptions;
use super::observability::{IngestContext, IngestObserver, IngestSeverity, IngestStats};
use super::{csv, pdf, source, text};

/// Options controlling ingestion behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct IngestOptions {
    /// If `None`, classify by MIME type and filename.
    pub kind: Option<FileKind>,
    /// CSV-specific options.
    pub csv: CsvOptions,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestSeverity,
}

impl fmt::Debug for IngestOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestOptions")
            .field("kind", &self.kind)
            .field("csv", &self.csv)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            kind: None,
            csv: CsvOptions::default(),
            observer: None,
            alert_at_or_above: IngestSeverity::Critical,
        }
    }
}

/// Ingest one selected file.
///
/// The decode path is fixed before the read starts: PDFs are read as raw bytes, CSV and text
/// as decoded text. The read is the only `.await` point.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with byte and row counts
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```
/// use file_ingest::ingestion::{ingest, IngestOptions};
/// use file_ingest::types::{Ingested, SelectedFile};
///
/// # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # rt.block_on(async {
/// let file = SelectedFile::in_memory("scores.csv", "text/csv", "a,b\n1,2\n");
/// let result = ingest(Some(&file), &IngestOptions::default()).await?;
/// assert_eq!(
///     result,
///     Ingested::Csv {
///         rows: vec![vec!["a".into(), "b".into()], vec!["1".into(), "2".into()]],
///     }
/// );
/// # Ok::<(), file_ingest::IngestError>(())
/// # }).unwrap();
/// ```
///
/// Force a decode path when the name and MIME type say nothing useful:
///
/// ```no_run
/// use file_ingest::ingestion::{ingest, IngestOptions};
/// use file_ingest::types::{FileKind, SelectedFile};
///
/// # async fn run() -> Result<(), file_ingest::IngestError> {
/// let opts = IngestOptions {
///     kind: Some(FileKind::Csv),
///     ..Default::default()
/// };
/// let file = SelectedFile::from_path("export_without_extension", "application/octet-stream");
/// let result = ingest(Some(&file), &opts).await?;
/// println!("rows={}", result.row_count());
/// # Ok(())
/// # }
/// ```
pub async fn ingest(file: Option<&SelectedFile>, options: &IngestOptions) -> IngestResult<Ingested> {
    let Some(file) = file else {
        return Err(no_file_selected(options));
    };

    let mut ctx = IngestContext {
        name: file.name.clone(),
        mime_type: file.mime_type.clone(),
        kind: None,
    };

    let result = ingest_selected(file, options, &mut ctx).await;
    match &result {
        Ok((ingested, bytes)) => {
            if let Some(obs) = options.observer.as_ref() {
                obs.on_success(
                    &ctx,
                    IngestStats {
                        bytes: *bytes,
                        rows: ingested.row_count(),
                    },
                );
            }
        }
        Err(e) => report_failure(options, &ctx, e),
    }

    result.map(|(ingested, _)| ingested)
}

async fn ingest_selected(
    file: &SelectedFile,
    options: &IngestOptions,
    ctx: &mut IngestContext,
) -> IngestResult<(Ingested, usize)> {
    let kind = match options.kind {
        Some(k) => k,
        None => classify(&file.mime_type, &file.name)
            .kind()
            .ok_or_else(|| IngestError::UnsupportedType {
                name: file.name.clone(),
                mime_type: file.mime_type.clone(),
            })?,
    };
    ctx.kind = Some(kind);

    let contents = source::read_file(file, kind.read_mode()).await?;
    let bytes = contents.len();
    let ingested = decode(&file.name, kind, contents, &options.csv)?;
    Ok((ingested, bytes))
}

/// Decode already-read contents along the given path.
///
/// Contents read in the other mode are converted (text to bytes, or bytes to lossy UTF-8).
pub fn decode(name: &str, kind: FileKind, contents: FileContents, csv_options: &CsvOptions) -> IngestResult<Ingested> {
    match kind {
        FileKind::Csv => csv::ingest_csv_from_str(name, &into_text(contents), csv_options),
        FileKind::Text => Ok(text::ingest_text(into_text(contents))),
        FileKind::Pdf => match contents {
            FileContents::Binary(bytes) => pdf::ingest_pdf_from_bytes(name, &bytes),
            FileContents::Text(s) => pdf::ingest_pdf_from_bytes(name, s.as_bytes()),
        },
    }
}

fn into_text(contents: FileContents) -> String {
    match contents {
        FileContents::Text(s) => s,
        FileContents::Binary(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
    }
}

/// Build the empty-selection error and report it to the observer.
pub(crate) fn no_file_selected(options: &IngestOptions) -> IngestError {
    let ctx = IngestContext {
        name: String::new(),
        mime_type: String::new(),
        kind: None,
    };
    let err = IngestError::NoFileSelected;
    report_failure(options, &ctx, &err);
    err
}

fn report_failure(options: &IngestOptions, ctx: &IngestContext, e: &IngestError) {
    if let Some(obs) = options.observer.as_ref() {
        let sev = IngestSeverity::for_error(e);
        obs.on_failure(ctx, sev, e);
        if sev >= options.alert_at_or_above {
            obs.on_alert(ctx, sev, e);
        }
    }
}

/// Convenience helper for callers that want an owned request object.
///
/// This can be useful if you want to hand ingestion work to a spawned task.
#[derive(Clone)]
pub struct IngestRequest {
    /// The selected file, or `None` for an empty selection.
    pub file: Option<SelectedFile>,
    /// Options controlling ingestion.
    pub options: IngestOptions,
}

impl fmt::Debug for IngestRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestRequest")
            .field("file", &self.file.as_ref().map(|f| f.name.as_str()))
            .field("options", &self.options)
            .finish()
    }
}

impl IngestRequest {
    /// Execute the request by calling [`ingest`].
    pub async fn run(&self) -> IngestResult<Ingested> {
        ingest(self.file.as_ref(), &self.options).await
    }
}
