//! Corpus reader for a directory of XML files

use std::fs;
use std::path::{Path, PathBuf};

use corpus_traits::error::{Error, Result};
use corpus_traits::{CorpusReader, Entry, EntryIter, MarkerQuery};

use crate::markers::apply_markers;
use crate::matches::MatchIter;
use crate::name_compare::name_compare;
use crate::xpath::XPathQuery;

/// Reads a corpus stored as `*.xml` files below a directory.
///
/// Entry names are paths relative to the directory, `/`-separated, in
/// natural name order. Subdirectories are included.
#[derive(Debug, Clone)]
pub struct DirectoryCorpusReader {
    root: PathBuf,
    name: String,
    entries: Vec<String>,
}

impl DirectoryCorpusReader {
    /// Open a directory corpus
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let root = path.as_ref();
        let display = root.display().to_string();

        if !root.is_dir() {
            return Err(Error::corpus_open(&display, "non-existent or not readable"));
        }

        let mut entries = Vec::new();
        collect_entries(root, root, &mut entries)
            .map_err(|e| Error::corpus_open(&display, e.to_string()))?;
        entries.sort_by(|a, b| name_compare(a, b));

        Ok(Self {
            root: root.to_path_buf(),
            name: display,
            entries,
        })
    }

    /// Directory the corpus was opened from
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn collect_entries(root: &Path, dir: &Path, entries: &mut Vec<String>) -> std::io::Result<()> {
    for dir_entry in fs::read_dir(dir)? {
        let path = dir_entry?.path();
        if path.is_dir() {
            collect_entries(root, &path, entries)?;
        } else if path.extension().is_some_and(|ext| ext == "xml") {
            if let Ok(relative) = path.strip_prefix(root) {
                let name = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                entries.push(name);
            }
        }
    }
    Ok(())
}

impl CorpusReader for DirectoryCorpusReader {
    fn name(&self) -> &str {
        &self.name
    }

    fn entries(&self) -> Result<Vec<String>> {
        Ok(self.entries.clone())
    }

    fn read(&self, entry: &str) -> Result<String> {
        fs::read_to_string(self.root.join(entry))
            .map_err(|e| Error::entry_read(entry, e.to_string()))
    }

    fn query<'a>(&'a self, query: &str) -> Result<EntryIter<'a>> {
        let query = XPathQuery::compile(query)?;
        Ok(Box::new(MatchIter::new(self, query, self.entries.clone())))
    }

    fn read_mark_queries(&self, entry: &Entry, markers: &[MarkerQuery]) -> Result<String> {
        apply_markers(&self.read(&entry.name)?, markers)
    }

    fn len(&self) -> Result<usize> {
        Ok(self.entries.len())
    }
}
