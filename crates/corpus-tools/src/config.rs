//! Pipeline configuration

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use corpus_traits::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// What to do when one sentence cannot be read or transformed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Stop the whole run at the first failing sentence
    #[default]
    Abort,
    /// Report the failing sentence and continue with the next one
    Skip,
}

/// Settings for a pipeline run.
///
/// Loaded from JSON; every field is optional:
///
/// ```json
/// { "error_policy": "skip", "unique": true, "macros": "alpino.macros" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub error_policy: ErrorPolicy,
    /// Print each sentence once, however many of its nodes match
    pub unique: bool,
    /// Stylesheet to use instead of the bundled one
    pub stylesheet: Option<PathBuf>,
    /// Macro file expanded into the query
    pub macros: Option<PathBuf>,
}

impl PipelineConfig {
    /// Parse a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::config(e.to_string()))
    }

    /// Load a JSON configuration file.
    ///
    /// Relative `stylesheet` and `macros` paths are resolved against the
    /// directory of the configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))?;
        let mut config = Self::from_json(&json)
            .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))?;

        if let Some(base) = path.parent() {
            config.stylesheet = config.stylesheet.map(|p| base.join(p));
            config.macros = config.macros.map(|p| base.join(p));
        }

        Ok(config)
    }
}
