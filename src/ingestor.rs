//! The file-upload component: one [`Outcome`] slot driven by user selections.
//!
//! [`FileIngestor::select`] is the simple path. Hosts that must keep handling events while a
//! read is in flight split it into [`FileIngestor::begin`], [`Attempt::run`] and
//! [`FileIngestor::complete`]. Every selection gets a new generation number and only the
//! completion of the latest one is applied, so a slow earlier read can never overwrite a newer
//! selection.

use crate::error::IngestResult;
use crate::ingestion::unified::no_file_selected;
use crate::ingestion::{IngestOptions, IngestRequest};
use crate::types::{Ingested, Outcome, SelectedFile};
use crate::view::{self, View};

/// Owns the state of a single upload widget.
#[derive(Debug, Default)]
pub struct FileIngestor {
    options: IngestOptions,
    outcome: Outcome,
    generation: u64,
}

/// A read started by [`FileIngestor::begin`], detached from the ingestor so it can be awaited
/// (or spawned) without holding a borrow.
#[derive(Debug)]
pub struct Attempt {
    generation: u64,
    request: IngestRequest,
}

/// The result of an [`Attempt`], to be handed back to [`FileIngestor::complete`].
#[derive(Debug)]
pub struct Completed {
    generation: u64,
    result: IngestResult<Ingested>,
}

impl Attempt {
    /// Generation number of the selection that started this attempt.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Read and decode the file.
    pub async fn run(self) -> Completed {
        Completed {
            generation: self.generation,
            result: self.request.run().await,
        }
    }
}

impl Completed {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn result(&self) -> &IngestResult<Ingested> {
        &self.result
    }
}

impl FileIngestor {
    pub fn new(options: IngestOptions) -> Self {
        Self {
            options,
            outcome: Outcome::Idle,
            generation: 0,
        }
    }

    pub fn options(&self) -> &IngestOptions {
        &self.options
    }

    /// State of the latest selection.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Generation number of the latest selection (0 before any selection).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Handle a selection and wait for it to resolve.
    pub async fn select(&mut self, file: Option<SelectedFile>) -> &Outcome {
        if let Some(attempt) = self.begin(file) {
            let done = attempt.run().await;
            self.complete(done);
        }
        &self.outcome
    }

    /// Start handling a selection.
    ///
    /// An empty selection fails immediately with `NoFileSelected` and returns `None`. Otherwise
    /// the previous result or error is cleared, the state becomes [`Outcome::Pending`], and the
    /// returned [`Attempt`] performs the read.
    pub fn begin(&mut self, file: Option<SelectedFile>) -> Option<Attempt> {
        self.generation += 1;

        let Some(file) = file else {
            self.outcome = Outcome::Failed(no_file_selected(&self.options));
            return None;
        };

        tracing::debug!(name = %file.name, generation = self.generation, "selection started");
        self.outcome = Outcome::Pending {
            name: file.name.clone(),
        };
        Some(Attempt {
            generation: self.generation,
            request: IngestRequest {
                file: Some(file),
                options: self.options.clone(),
            },
        })
    }

    /// Apply a finished attempt. Returns `false` (and changes nothing) when a newer selection
    /// has been made since the attempt began.
    pub fn complete(&mut self, done: Completed) -> bool {
        if done.generation != self.generation {
            tracing::debug!(
                stale = done.generation,
                current = self.generation,
                "discarding stale completion"
            );
            return false;
        }
        self.outcome = done.result.into();
        true
    }

    /// Reset to [`Outcome::Idle`]. Any attempt still in flight becomes stale.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.outcome = Outcome::Idle;
    }

    /// Render the current state.
    pub fn view(&self) -> View {
        view::render(&self.outcome)
    }
}
