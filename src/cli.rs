//! Command-line interface definition and argument parsing.
//!
//! The tool takes at most one positional path. Arity is deliberately left
//! open here (`num_args = 0..`) and validated by
//! [`list_dir_sizes::dispatch::resolve_target`] instead of by clap, so
//! that an over-supplied invocation exits with code 1 and a usage line on
//! stderr rather than clap's own usage error and exit code 2.

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the list-dir-sizes tool.
#[derive(Parser)]
#[command(name = "list-dir-sizes")]
#[command(
    about = "List a directory's immediate children with recursively aggregated, human-readable sizes"
)]
#[command(version)]
pub struct Cli {
    /// Directory or file to report on
    ///
    /// Defaults to the current working directory when omitted. Supplying
    /// more than one path is a usage error.
    #[arg(num_args = 0..)]
    pub paths: Vec<PathBuf>,
}
