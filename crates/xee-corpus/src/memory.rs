//! In-memory corpus reader

use corpus_traits::error::{Error, Result};
use corpus_traits::{CorpusReader, Entry, EntryIter, MarkerQuery};

use crate::markers::apply_markers;
use crate::matches::MatchIter;
use crate::xpath::XPathQuery;

/// Corpus held in memory, entries kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryCorpusReader {
    name: String,
    entries: Vec<(String, String)>,
}

impl MemoryCorpusReader {
    /// Create an empty corpus
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Add an entry, replacing the data of an existing entry with the same name
    pub fn insert<N: Into<String>, X: Into<String>>(&mut self, name: N, xml: X) {
        let name = name.into();
        let xml = xml.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = xml,
            None => self.entries.push((name, xml)),
        }
    }

    /// Builder-style `insert`
    pub fn with_entry<N: Into<String>, X: Into<String>>(mut self, name: N, xml: X) -> Self {
        self.insert(name, xml);
        self
    }
}

impl CorpusReader for MemoryCorpusReader {
    fn name(&self) -> &str {
        &self.name
    }

    fn entries(&self) -> Result<Vec<String>> {
        Ok(self.entries.iter().map(|(name, _)| name.clone()).collect())
    }

    fn read(&self, entry: &str) -> Result<String> {
        self.entries
            .iter()
            .find(|(name, _)| name == entry)
            .map(|(_, xml)| xml.clone())
            .ok_or_else(|| Error::entry_read(entry, "no such entry"))
    }

    fn query<'a>(&'a self, query: &str) -> Result<EntryIter<'a>> {
        let query = XPathQuery::compile(query)?;
        Ok(Box::new(MatchIter::new(self, query, self.entries()?)))
    }

    fn read_mark_queries(&self, entry: &Entry, markers: &[MarkerQuery]) -> Result<String> {
        apply_markers(&self.read(&entry.name)?, markers)
    }

    fn len(&self) -> Result<usize> {
        Ok(self.entries.len())
    }
}
