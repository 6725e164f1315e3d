//! Query runner
//!
//! Streams the matches of a query through a transformer: one entry is
//! read, marked, transformed and written before the next is requested.

use std::collections::HashSet;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use corpus_traits::error::Result;
use corpus_traits::{CorpusReader, MarkerQuery, Transform};
use xee_corpus::open_corpus;
use xrust_transform::Transformer;

use crate::config::{ErrorPolicy, PipelineConfig};
use crate::observer::{NoopObserver, RunObserver};

/// Counts gathered during a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Entries produced by the query
    pub matched: usize,
    /// Lines written
    pub printed: usize,
    /// Entries dropped under `ErrorPolicy::Skip`
    pub skipped: usize,
    /// Entries dropped because their sentence was already handled
    pub duplicates: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} matches, {} printed, {} skipped, {} duplicates",
            self.matched, self.printed, self.skipped, self.duplicates
        )
    }
}

/// Query-and-transform pipeline
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run `query` over `reader`, writing one transformed line per match.
    ///
    /// Every match is read with the query itself as an `active` marker, so
    /// the stylesheet can highlight the matched nodes. The query is
    /// compiled before anything is written. The transformer is closed once
    /// all entries are processed, also when nothing matched.
    pub fn run<R, T, W, O>(
        &self,
        reader: &R,
        transformer: T,
        query: &str,
        out: &mut W,
        observer: &mut O,
    ) -> Result<RunSummary>
    where
        R: CorpusReader + ?Sized,
        T: Transform,
        W: Write,
        O: RunObserver,
    {
        let entries = reader.query(query)?;
        let markers = [MarkerQuery::active(query)];

        let mut summary = RunSummary::default();
        let mut seen = HashSet::new();

        for entry in entries {
            let entry = entry?;
            summary.matched += 1;
            observer.on_entry(&entry);

            if self.config.unique && !seen.insert(entry.name.clone()) {
                summary.duplicates += 1;
                continue;
            }

            let line = reader
                .read_mark_queries(&entry, &markers)
                .and_then(|data| transformer.transform(&data));

            match line {
                Ok(line) => {
                    writeln!(out, "{}", line)?;
                    summary.printed += 1;
                }
                Err(e) if self.config.error_policy == ErrorPolicy::Skip && e.is_entry_local() => {
                    observer.on_skipped(&entry, &e);
                    summary.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        out.flush()?;
        transformer.close();
        observer.on_finished(&summary);

        Ok(summary)
    }
}

/// Open `corpus`, compile `stylesheet`, and print every match of `query`
/// to standard output with the default configuration.
pub fn run<S, C>(stylesheet: S, corpus: C, query: &str) -> Result<RunSummary>
where
    S: AsRef<Path>,
    C: AsRef<Path>,
{
    let reader = open_corpus(corpus)?;
    let transformer = Transformer::construct(stylesheet)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Pipeline::default().run(&reader, transformer, query, &mut out, &mut NoopObserver)
}
