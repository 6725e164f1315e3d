//! Core trait abstractions for treebank corpus tools.
//!
//! This crate defines the error taxonomy and the traits that corpus
//! readers and stylesheet transformers implement, so the query pipeline can
//! be driven by any reader/transformer pair.

pub mod error;
pub mod reader;
pub mod transform;

pub use error::{Error, Result};
pub use reader::{CorpusReader, Entry, EntryIter, MarkerQuery, ACTIVE_ATTRIBUTE, ACTIVE_VALUE};
pub use transform::Transform;
