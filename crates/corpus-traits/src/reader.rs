//! Corpus reader abstraction trait

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Attribute name used to mark nodes that matched the run query.
pub const ACTIVE_ATTRIBUTE: &str = "active";

/// Value of the active marker attribute.
pub const ACTIVE_VALUE: &str = "1";

/// One match produced by a corpus query.
///
/// A sentence with several matching nodes produces several entries with
/// the same name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    /// Corpus-relative name of the sentence
    pub name: String,
}

impl Entry {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }
}

/// Instruction to tag every element matching `query` with `attr="value"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerQuery {
    pub query: String,
    pub attr: String,
    pub value: String,
}

impl MarkerQuery {
    pub fn new<Q, A, V>(query: Q, attr: A, value: V) -> Self
    where
        Q: Into<String>,
        A: Into<String>,
        V: Into<String>,
    {
        Self {
            query: query.into(),
            attr: attr.into(),
            value: value.into(),
        }
    }

    /// The marker that flags nodes matching `query` as active.
    pub fn active<Q: Into<String>>(query: Q) -> Self {
        Self::new(query, ACTIVE_ATTRIBUTE, ACTIVE_VALUE)
    }
}

/// Lazy sequence of query matches.
pub type EntryIter<'a> = Box<dyn Iterator<Item = Result<Entry>> + 'a>;

/// Trait for treebank corpus readers.
///
/// Readers are owned values passed explicitly to whatever consumes them;
/// they are read-only for the duration of a query.
pub trait CorpusReader {
    /// Human readable name of the corpus (usually its path)
    fn name(&self) -> &str;

    /// Names of all entries, in corpus order
    fn entries(&self) -> Result<Vec<String>>;

    /// Read the raw XML of an entry
    fn read(&self, entry: &str) -> Result<String>;

    /// Evaluate a query, yielding one entry per matching node.
    ///
    /// The query is compiled before this returns, so an invalid query fails
    /// here rather than during iteration.
    fn query<'a>(&'a self, query: &str) -> Result<EntryIter<'a>>;

    /// Read an entry with the given marker queries applied
    fn read_mark_queries(&self, entry: &Entry, markers: &[MarkerQuery]) -> Result<String>;

    /// Number of entries in the corpus
    fn len(&self) -> Result<usize> {
        Ok(self.entries()?.len())
    }

    /// Check if the corpus has no entries
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl<R: CorpusReader + ?Sized> CorpusReader for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn entries(&self) -> Result<Vec<String>> {
        (**self).entries()
    }

    fn read(&self, entry: &str) -> Result<String> {
        (**self).read(entry)
    }

    fn query<'a>(&'a self, query: &str) -> Result<EntryIter<'a>> {
        (**self).query(query)
    }

    fn read_mark_queries(&self, entry: &Entry, markers: &[MarkerQuery]) -> Result<String> {
        (**self).read_mark_queries(entry, markers)
    }
}
