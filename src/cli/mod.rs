// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::CliArgs;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// On wrong arity or an invalid mode selector, clap prints a usage
/// message to the diagnostic stream and exits the process non-zero.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
