//! Run observer: hooks for reporting progress and skipped sentences.
//!
//! Observers receive notifications while the pipeline runs without
//! coupling to its logic. Standard output stays reserved for transformed
//! sentences; observers that report do so through `tracing`.

use corpus_traits::{Entry, Error};

use crate::pipeline::RunSummary;

/// Callbacks invoked by [`crate::Pipeline::run`]
pub trait RunObserver {
    /// An entry was produced by the query
    fn on_entry(&mut self, _entry: &Entry) {}

    /// An entry failed and was skipped under `ErrorPolicy::Skip`
    fn on_skipped(&mut self, _entry: &Entry, _error: &Error) {}

    /// The run completed
    fn on_finished(&mut self, _summary: &RunSummary) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RunObserver for NoopObserver {}

/// Observer that emits `tracing` events.
///
/// Skipped entries are warnings, the summary is informational and each
/// match is a debug event. The installed subscriber decides what is shown.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RunObserver for TracingObserver {
    fn on_entry(&mut self, entry: &Entry) {
        tracing::debug!(entry = %entry.name, "match");
    }

    fn on_skipped(&mut self, entry: &Entry, error: &Error) {
        tracing::warn!("skipping entry '{}': {}", entry.name, error);
    }

    fn on_finished(&mut self, summary: &RunSummary) {
        tracing::info!("{}", summary);
    }
}
