//! Shared command line handling for the `bracket` and `vorfeld` binaries

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Args, Parser};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use xee_corpus::open_corpus;
use xrust_transform::Transformer;

use crate::config::{ErrorPolicy, PipelineConfig};
use crate::macros::Macros;
use crate::observer::TracingObserver;
use crate::pipeline::{Pipeline, RunSummary};
use crate::{BUNDLED_STYLESHEET, STYLESHEET_NAME};

/// Usage line of `bracket`
pub const BRACKET_USAGE: &str = "query corpus";

/// Usage line of `vorfeld`
pub const VORFELD_USAGE: &str = "corpus";

/// Options shared by both binaries
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Stylesheet to apply instead of bracketed-sentence.xsl
    #[arg(long, short = 's', value_name = "FILE")]
    pub stylesheet: Option<PathBuf>,

    /// Load query macros from FILE
    #[arg(long, short = 'm', value_name = "FILE")]
    pub macros: Option<PathBuf>,

    /// Read pipeline settings from a JSON file
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// What to do when a single sentence cannot be transformed
    #[arg(long = "on-error", value_enum, value_name = "POLICY")]
    pub on_error: Option<ErrorPolicy>,

    /// Print every sentence once, even when several of its nodes match
    #[arg(long, short = 'u')]
    pub unique: bool,

    /// Report a summary of the run on standard error
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(Parser, Debug)]
#[command(name = "bracket", version)]
#[command(about = "Print every sentence matching a query, with the matched nodes bracketed")]
pub struct BracketArgs {
    /// Query selecting the nodes to bracket
    pub query: String,

    /// Corpus to search
    pub corpus: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Parser, Debug)]
#[command(name = "vorfeld", version)]
#[command(about = "Print every sentence with its vorfeld bracketed")]
pub struct VorfeldArgs {
    /// Corpus to search
    pub corpus: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Wrong command line; printed as `program: usage`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageError {
    pub program: String,
    pub usage: &'static str,
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.program, self.usage)
    }
}

impl std::error::Error for UsageError {}

/// Parse arguments, turning any argument error into a [`UsageError`].
///
/// `--help` and `--version` print and exit as usual.
pub fn parse_args<P, I, T>(args: I, usage: &'static str) -> std::result::Result<P, UsageError>
where
    P: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = args
        .first()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| P::command().get_name().to_string());

    match P::try_parse_from(&args) {
        Ok(parsed) => Ok(parsed),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => Err(UsageError { program, usage }),
    }
}

/// Parse the process arguments; on error print the usage line to standard
/// output and exit with status 1.
pub fn parse_or_exit<P: Parser>(usage: &'static str) -> P {
    parse_args(std::env::args_os(), usage).unwrap_or_else(|e| {
        println!("{}", e);
        process::exit(1);
    })
}

/// Send diagnostics to standard error.
///
/// Warnings are always shown; `verbose` adds the run summary. `RUST_LOG`
/// can still raise the level further.
pub fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

/// Merge the configuration file (if any) with command line overrides
pub fn resolve_config(common: &CommonArgs) -> Result<PipelineConfig> {
    let mut config = match &common.config {
        Some(path) => PipelineConfig::from_json_file(path)?,
        None => PipelineConfig::default(),
    };

    if let Some(policy) = common.on_error {
        config.error_policy = policy;
    }
    if common.unique {
        config.unique = true;
    }
    if common.stylesheet.is_some() {
        config.stylesheet = common.stylesheet.clone();
    }
    if common.macros.is_some() {
        config.macros = common.macros.clone();
    }

    Ok(config)
}

/// `bracketed-sentence.xsl` next to the running executable, if present
pub fn stylesheet_beside_executable() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let path = exe.parent()?.join(STYLESHEET_NAME);
    path.is_file().then_some(path)
}

/// Compile the configured stylesheet, the one next to the executable, or
/// the bundled copy, in that order.
pub fn load_transformer(stylesheet: Option<&Path>) -> Result<Transformer> {
    match stylesheet
        .map(Path::to_path_buf)
        .or_else(stylesheet_beside_executable)
    {
        Some(path) => Transformer::construct(&path)
            .with_context(|| format!("Could not read stylesheet {}", path.display())),
        None => Transformer::from_source(BUNDLED_STYLESHEET)
            .context("Could not compile the bundled stylesheet"),
    }
}

/// Expand macros into `query` when a macro file is configured
pub fn expand_query(query: &str, config: &PipelineConfig) -> Result<String> {
    match &config.macros {
        Some(path) => Ok(Macros::load(path)?.expand(query)),
        None => Ok(query.to_string()),
    }
}

/// Run a query over a corpus and print the matches to standard output
pub fn execute(query: &str, corpus: &Path, common: &CommonArgs) -> Result<RunSummary> {
    let config = resolve_config(common)?;
    let query = expand_query(query, &config)?;

    let reader = open_corpus(corpus)?;
    let transformer = load_transformer(config.stylesheet.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut observer = TracingObserver;

    let summary = Pipeline::new(config)
        .run(&reader, transformer, &query, &mut out, &mut observer)
        .with_context(|| format!("Error while querying {}", corpus.display()))?;

    Ok(summary)
}

/// Exit code for a finished run
pub fn exit_with(result: Result<RunSummary>) -> ! {
    match result {
        Ok(_) => process::exit(0),
        Err(e) => {
            eprintln!("error: {:#}", e);
            process::exit(1);
        }
    }
}
