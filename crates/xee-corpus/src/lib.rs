//! Treebank corpus readers backed by the xee XPath 3.1 engine
//!
//! Readers in this crate implement the `corpus-traits` interfaces:
//! queries are compiled with xee, evaluated per sentence, and marker
//! queries are applied to a xot tree before the sentence is handed out.

pub mod directory;
pub mod markers;
pub mod memory;
pub mod name_compare;
pub mod open;
pub mod xpath;

mod matches;

// Re-export main types
pub use directory::DirectoryCorpusReader;
pub use markers::apply_markers;
pub use memory::MemoryCorpusReader;
pub use name_compare::name_compare;
pub use open::open_corpus;
pub use xpath::{NodePath, XPathQuery};
