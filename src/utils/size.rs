//! Size aggregation and human-readable formatting.
//!
//! This module provides the two size primitives of the tool: measuring how
//! many bytes of regular-file data a directory holds, and turning a byte
//! count into the fixed `KB`/`MB`/`GB` display format.

use std::path::Path;

use walkdir::WalkDir;

use crate::config::TraversalMode;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;
const GIB: u64 = 1024 * 1024 * 1024;

/// Total size in bytes of the regular files contained in `path`.
///
/// [`TraversalMode::Deep`] descends the full subtree; [`TraversalMode::Shallow`]
/// sums only the directory's immediate children, so nested subdirectories
/// contribute nothing. Only regular files are counted: directories,
/// symlinks, devices, and sockets contribute 0, and symlinks are not
/// followed. Entries that cannot be read (permission denied, vanished
/// mid-traversal) are skipped so the listing as a whole never aborts — an
/// unreadable subtree simply contributes 0.
///
/// Returns `0` if the path does not exist or cannot be traversed at the
/// root level.
#[must_use]
pub fn dir_size(path: &Path, mode: TraversalMode) -> u64 {
    let walker = match mode {
        TraversalMode::Deep => WalkDir::new(path),
        TraversalMode::Shallow => WalkDir::new(path).max_depth(1),
    };

    walker
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.metadata().ok())
        .map(|metadata| metadata.len())
        .sum()
}

/// Format a byte count for display.
///
/// Byte counts below 1 MiB are shown as whole kibibytes with truncating
/// division (a 500-byte file formats as `"0 KB"`), counts below 1 GiB as
/// mebibytes with exactly two decimals, and everything above as gibibytes
/// with exactly two decimals. Decimals round half-to-even via the standard
/// float formatter.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    if bytes < MIB {
        format!("{} KB", bytes / KIB)
    } else if bytes < GIB {
        format!("{:.2} MB", bytes as f64 / MIB as f64)
    } else {
        format!("{:.2} GB", bytes as f64 / GIB as f64)
    }
}

/// Format a directory's aggregate size, collapsing zero to `"Empty"`.
///
/// Only directory aggregates collapse; a zero-byte regular file keeps the
/// plain [`format_size`] rendering of `"0 KB"`.
#[must_use]
pub fn format_dir_size(bytes: u64) -> String {
    if bytes == 0 {
        "Empty".to_string()
    } else {
        format_size(bytes)
    }
}
