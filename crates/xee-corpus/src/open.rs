//! Corpus factory

use std::fs;
use std::path::Path;

use corpus_traits::error::{Error, Result};
use corpus_traits::CorpusReader;

use crate::directory::DirectoryCorpusReader;
use crate::memory::MemoryCorpusReader;

/// Open the corpus at `path`, picking a reader from what the path is.
///
/// A directory is read as a directory corpus, a single `.xml` file as a
/// one-sentence corpus. Anything else is not a recognized corpus.
pub fn open_corpus<P: AsRef<Path>>(path: P) -> Result<Box<dyn CorpusReader>> {
    let path = path.as_ref();
    let display = path.display().to_string();

    if path.is_dir() {
        return Ok(Box::new(DirectoryCorpusReader::open(path)?));
    }

    if path.is_file() && path.extension().is_some_and(|ext| ext == "xml") {
        let xml = fs::read_to_string(path).map_err(|e| Error::corpus_open(&display, e.to_string()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| display.clone());
        return Ok(Box::new(MemoryCorpusReader::new(&display).with_entry(name, xml)));
    }

    if path.exists() {
        Err(Error::corpus_open(display, "not a recognized corpus"))
    } else {
        Err(Error::corpus_open(display, "non-existent or not readable"))
    }
}
