//! Target resolution and top-level dispatch.
//!
//! This is the entry-point logic behind the binary: resolve the target
//! path from the positional arguments, validate that it exists, and route
//! it to either a full directory listing or a single-file report.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ListOptions;
use crate::entry::{EntryKind, display_name};
use crate::error::ListError;
use crate::lister::Lister;
use crate::output::OutputStyle;
use crate::utils::size::format_size;

/// Resolve the listing target from the positional arguments.
///
/// Zero arguments target the current working directory; exactly one names
/// the target verbatim (no shape validation); anything more is a usage
/// error.
///
/// # Errors
///
/// Returns [`ListError::Usage`] for more than one argument, or
/// [`ListError::Io`] when the current directory cannot be determined.
pub fn resolve_target(paths: &[PathBuf]) -> Result<PathBuf, ListError> {
    match paths {
        [] => env::current_dir()
            .map_err(|source| ListError::io("Failed to resolve the current directory", source)),
        [path] => Ok(path.clone()),
        _ => Err(ListError::Usage),
    }
}

/// Build the one-line report for a regular-file target.
///
/// The `File:` prefix and the file name share the regular-file color; the
/// size sits outside the colored span, as in a directory listing line.
///
/// # Errors
///
/// Returns [`ListError::Io`] when the file's metadata cannot be read.
pub fn file_report(target: &Path, style: OutputStyle) -> Result<String, ListError> {
    let metadata = fs::metadata(target).map_err(|source| {
        ListError::io(format!("Failed to read metadata for {}", target.display()), source)
    })?;

    let name = format!("File: {}", display_name(target));

    Ok(format!(
        "{} ({})",
        style.paint(EntryKind::RegularFile, &name),
        format_size(metadata.len())
    ))
}

/// Report on one target: a full directory listing or a single-file line.
///
/// The header names the path being listed and is printed as soon as the
/// target is known to exist, before the directory/file distinction is
/// made. All report output goes to stdout; diagnostics are left to the
/// caller.
///
/// # Errors
///
/// - [`ListError::PathNotFound`] when the target does not exist.
/// - [`ListError::InvalidPathType`] when it is neither a directory nor a
///   regular file.
/// - [`ListError::Io`] for enumeration or metadata failures.
pub fn run(target: &Path, options: ListOptions) -> Result<(), ListError> {
    if !target.exists() {
        return Err(ListError::PathNotFound(target.to_path_buf()));
    }

    println!("Listing contents of: {}", target.display());

    if target.is_dir() {
        let lister = Lister::new(options);
        for line in lister.list_directory(target)? {
            println!("{line}");
        }

        return Ok(());
    }

    if target.is_file() {
        let line = file_report(target, OutputStyle::new(options.color_enabled))?;
        println!("{line}");

        return Ok(());
    }

    Err(ListError::InvalidPathType(target.to_path_buf()))
}
