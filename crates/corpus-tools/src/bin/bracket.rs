//! Print every sentence matching a query, with the matched nodes bracketed.
//!
//! Usage: `bracket <query> <corpus>`

use corpus_tools::cli::{self, BracketArgs, BRACKET_USAGE};

fn main() {
    let args: BracketArgs = cli::parse_or_exit(BRACKET_USAGE);
    cli::init_tracing(args.common.verbose);
    cli::exit_with(cli::execute(&args.query, &args.corpus, &args.common));
}
