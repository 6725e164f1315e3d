//! Lazy iteration over query matches

use corpus_traits::{CorpusReader, Entry, Error, Result};

use crate::xpath::XPathQuery;

/// Walks the entries of a reader, reading and querying one sentence at a
/// time, and yields one `Entry` per matching node.
pub(crate) struct MatchIter<'a, R: CorpusReader + ?Sized> {
    reader: &'a R,
    query: XPathQuery,
    names: std::vec::IntoIter<String>,
    pending: Option<(String, usize)>,
}

impl<'a, R: CorpusReader + ?Sized> MatchIter<'a, R> {
    pub(crate) fn new(reader: &'a R, query: XPathQuery, names: Vec<String>) -> Self {
        Self {
            reader,
            query,
            names: names.into_iter(),
            pending: None,
        }
    }
}

impl<R: CorpusReader + ?Sized> Iterator for MatchIter<'_, R> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((name, remaining)) = &mut self.pending {
                if *remaining > 0 {
                    *remaining -= 1;
                    return Some(Ok(Entry::new(name.clone())));
                }
            }
            self.pending = None;

            let name = self.names.next()?;
            let xml = match self.reader.read(&name) {
                Ok(xml) => xml,
                Err(e) => return Some(Err(e)),
            };

            match self.query.count_matches(&xml) {
                Ok(0) => {}
                Ok(count) => self.pending = Some((name, count)),
                // Sentences that are not well-formed never match.
                Err(Error::XmlParse(_)) => {}
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
