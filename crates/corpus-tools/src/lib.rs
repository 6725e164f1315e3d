//! Corpus query-and-transform pipeline
//!
//! Runs a query over a treebank corpus, marks the matching nodes of every
//! hit as active, and prints each hit through an XSLT stylesheet. The
//! `bracket` and `vorfeld` binaries are thin wrappers around [`cli`].

pub mod cli;
pub mod config;
pub mod macros;
pub mod observer;
pub mod pipeline;
pub mod queries;

pub use config::{ErrorPolicy, PipelineConfig};
pub use macros::Macros;
pub use observer::{NoopObserver, RunObserver, TracingObserver};
pub use pipeline::{run, Pipeline, RunSummary};
pub use queries::VORFELD_QUERY;

/// File name of the bundled stylesheet
pub const STYLESHEET_NAME: &str = "bracketed-sentence.xsl";

/// Copy of `bracketed-sentence.xsl` compiled into the binaries
pub const BUNDLED_STYLESHEET: &str = include_str!("../stylesheets/bracketed-sentence.xsl");
