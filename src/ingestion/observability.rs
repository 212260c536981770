use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::error::IngestError;
use crate::types::FileKind;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum IngestSeverity {
    /// Informational event (e.g. an empty selection).
    Info,
    /// Warning-level event (e.g. a file type the widget does not handle).
    Warning,
    /// Error-level event (content could not be decoded).
    Error,
    /// Critical error (the file could not be read).
    Critical,
}

impl IngestSeverity {
    /// Severity of an ingestion failure.
    pub fn for_error(e: &IngestError) -> Self {
        match e {
            IngestError::NoFileSelected => Self::Info,
            IngestError::UnsupportedType { .. } => Self::Warning,
            IngestError::ParseFailure { .. } => Self::Error,
            IngestError::ReadFailure { .. } => Self::Critical,
        }
    }
}

/// Context about an ingestion attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestContext {
    /// Filename of the selected file (empty when nothing was selected).
    pub name: String,
    /// Declared MIME type.
    pub mime_type: String,
    /// Decode path, once classification succeeded.
    pub kind: Option<FileKind>,
}

/// Minimal stats reported on successful ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestStats {
    /// Bytes read from the source.
    pub bytes: usize,
    /// CSV rows, or lines of extracted text.
    pub rows: usize,
}

/// Observer interface for ingestion outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait IngestObserver: Send + Sync {
    /// Called when ingestion succeeds.
    fn on_success(&self, _ctx: &IngestContext, _stats: IngestStats) {}

    /// Called when ingestion fails.
    fn on_failure(&self, _ctx: &IngestContext, _severity: IngestSeverity, _error: &IngestError) {}

    /// Called when an ingestion failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &IngestContext, severity: IngestSeverity, error: &IngestError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn IngestObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn IngestObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl IngestObserver for CompositeObserver {
    fn on_success(&self, ctx: &IngestContext, stats: IngestStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &IngestContext, severity: IngestSeverity, error: &IngestError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &IngestContext, severity: IngestSeverity, error: &IngestError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Emits ingestion events through `tracing`.
///
/// Successes log at `info`, failures at `warn`, alerts at `error`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl IngestObserver for TracingObserver {
    fn on_success(&self, ctx: &IngestContext, stats: IngestStats) {
        tracing::info!(
            name = %ctx.name,
            mime_type = %ctx.mime_type,
            kind = ?ctx.kind,
            bytes = stats.bytes,
            rows = stats.rows,
            "ingest ok"
        );
    }

    fn on_failure(&self, ctx: &IngestContext, severity: IngestSeverity, error: &IngestError) {
        tracing::warn!(
            name = %ctx.name,
            mime_type = %ctx.mime_type,
            kind = ?ctx.kind,
            ?severity,
            %error,
            "ingest failed"
        );
    }

    fn on_alert(&self, ctx: &IngestContext, severity: IngestSeverity, error: &IngestError) {
        tracing::error!(
            name = %ctx.name,
            mime_type = %ctx.mime_type,
            kind = ?ctx.kind,
            ?severity,
            %error,
            "ingest alert"
        );
    }
}

/// Appends ingestion events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }

    /// `<ts> <event> kind=<kind> name=<name> mime=<mime> <detail>`; `-` stands in for a missing
    /// kind or MIME type.
    fn record(&self, event: &str, ctx: &IngestContext, detail: &str) {
        let mime = if ctx.mime_type.is_empty() { "-" } else { ctx.mime_type.as_str() };
        self.append_line(&format!(
            "{} {event} kind={} name={} mime={mime} {detail}",
            unix_ts(),
            kind_label(ctx.kind),
            ctx.name,
        ));
    }
}

impl IngestObserver for FileObserver {
    fn on_success(&self, ctx: &IngestContext, stats: IngestStats) {
        self.record("ok", ctx, &format!("bytes={} rows={}", stats.bytes, stats.rows));
    }

    fn on_failure(&self, ctx: &IngestContext, severity: IngestSeverity, error: &IngestError) {
        self.record("fail", ctx, &format!("severity={severity:?} err={error}"));
    }

    fn on_alert(&self, ctx: &IngestContext, severity: IngestSeverity, error: &IngestError) {
        self.record("ALERT", ctx, &format!("severity={severity:?} err={error}"));
    }
}

fn kind_label(kind: Option<FileKind>) -> String {
    kind.map_or_else(|| "-".to_string(), |k| k.to_string())
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
