//! Print every sentence with its vorfeld bracketed.
//!
//! Usage: `vorfeld <corpus>`

use corpus_tools::cli::{self, VorfeldArgs, VORFELD_USAGE};
use corpus_tools::VORFELD_QUERY;

fn main() {
    let args: VorfeldArgs = cli::parse_or_exit(VORFELD_USAGE);
    cli::init_tracing(args.common.verbose);
    cli::exit_with(cli::execute(VORFELD_QUERY, &args.corpus, &args.common));
}
