//! # list-dir-sizes
//!
//! A small CLI tool that lists the immediate children of a directory with
//! human-readable sizes and color-coded entry kinds.
//!
//! Directories are shown first with their full recursive size (`Empty`
//! when they hold no file data), then regular files with their own size,
//! then everything else (broken symlinks, devices, sockets) with `N/A`.
//! Pointing the tool at a single regular file prints a one-line report
//! instead of a listing.
//!
//! ## Usage
//!
//! ```bash
//! # List the current directory
//! list-dir-sizes
//!
//! # List a specific directory
//! list-dir-sizes ~/Downloads
//!
//! # Report on a single file
//! list-dir-sizes Cargo.toml
//! ```

mod cli;

use std::io::{IsTerminal, stdout};
use std::process::exit;

use anyhow::Result;
use clap::Parser;
use list_dir_sizes::config::{ListOptions, TraversalMode};
use list_dir_sizes::dispatch::{resolve_target, run};

use cli::Cli;

/// Entry point for the list-dir-sizes binary.
///
/// This function handles all errors gracefully by calling [`inner_main`]
/// and printing any errors to stderr before exiting with a non-zero
/// status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Resolves the target path from the arguments and dispatches it to the
/// listing pipeline. Color output is enabled only when stdout is a
/// terminal.
///
/// # Errors
///
/// Returns usage, path-resolution, and filesystem errors from target
/// resolution and the listing itself.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    let target = resolve_target(&args.paths)?;

    let options = ListOptions {
        traversal: TraversalMode::Deep,
        color_enabled: stdout().is_terminal(),
    };

    run(&target, options)?;

    Ok(())
}
