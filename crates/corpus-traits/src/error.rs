//! Error types for corpus operations

/// Result type for corpus operations
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for all corpus operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// XML parsing failed
    #[error("XML parsing error: {0}")]
    XmlParse(String),

    /// The corpus path does not exist or is not a recognized corpus
    #[error("Could not open corpus '{path}': {reason}")]
    CorpusOpen { path: String, reason: String },

    /// The query could not be compiled or evaluated
    #[error("Query evaluation error: {0}")]
    QueryEvaluation(String),

    /// The stylesheet could not be read or compiled
    #[error("Could not load stylesheet: {0}")]
    StylesheetLoad(String),

    /// The data handed to a transformer is not well-formed XML
    #[error("Could not open XML data: {0}")]
    TransformInput(String),

    /// Applying the stylesheet failed
    #[error("Could not apply transformation: {0}")]
    TransformApply(String),

    /// An entry could not be read from the corpus
    #[error("Could not read entry '{entry}': {reason}")]
    EntryRead { entry: String, reason: String },

    /// A marker query could not be applied
    #[error("Marker error: {0}")]
    Marker(String),

    /// Macro file parsing or expansion failed
    #[error("Macro error: {0}")]
    Macro(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new XML parsing error
    pub fn xml_parse<S: Into<String>>(msg: S) -> Self {
        Error::XmlParse(msg.into())
    }

    /// Create a new corpus open error
    pub fn corpus_open<P: Into<String>, S: Into<String>>(path: P, reason: S) -> Self {
        Error::CorpusOpen {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a new query evaluation error
    pub fn query<S: Into<String>>(msg: S) -> Self {
        Error::QueryEvaluation(msg.into())
    }

    /// Create a new stylesheet load error
    pub fn stylesheet<S: Into<String>>(msg: S) -> Self {
        Error::StylesheetLoad(msg.into())
    }

    /// Create a new transform input error
    pub fn transform_input<S: Into<String>>(msg: S) -> Self {
        Error::TransformInput(msg.into())
    }

    /// Create a new transform application error
    pub fn transform_apply<S: Into<String>>(msg: S) -> Self {
        Error::TransformApply(msg.into())
    }

    /// Create a new entry read error
    pub fn entry_read<E: Into<String>, S: Into<String>>(entry: E, reason: S) -> Self {
        Error::EntryRead {
            entry: entry.into(),
            reason: reason.into(),
        }
    }

    /// Create a new marker error
    pub fn marker<S: Into<String>>(msg: S) -> Self {
        Error::Marker(msg.into())
    }

    /// Create a new macro error
    pub fn macro_error<S: Into<String>>(msg: S) -> Self {
        Error::Macro(msg.into())
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Whether the error belongs to a single entry rather than the whole run.
    ///
    /// Only these errors are eligible for skip-and-continue.
    pub fn is_entry_local(&self) -> bool {
        matches!(
            self,
            Error::XmlParse(_)
                | Error::EntryRead { .. }
                | Error::Marker(_)
                | Error::TransformInput(_)
                | Error::TransformApply(_)
        )
    }
}
