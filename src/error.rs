//! Typed error kinds for the listing pipeline.
//!
//! Every fatal kind renders the exact one-line diagnostic that the binary
//! prints to stderr; all of them map to exit code 1. Unreadable subtrees
//! encountered *during* size aggregation are not represented here — they
//! degrade to a zero contribution instead of aborting the run (see
//! [`crate::utils::size::dir_size`]).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a listing run.
#[derive(Debug, Error)]
pub enum ListError {
    /// More than one positional argument was supplied.
    #[error("Usage: {} [directory or file path]", env!("CARGO_PKG_NAME"))]
    Usage,

    /// The target path does not exist.
    #[error("Path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    /// The target exists but is neither a directory nor a regular file.
    #[error("Invalid path type: {}", .0.display())]
    InvalidPathType(PathBuf),

    /// An underlying filesystem operation failed.
    #[error("{context}: {source}")]
    Io {
        /// What the failing operation was trying to do.
        context: String,

        /// The originating I/O error.
        #[source]
        source: io::Error,
    },
}

impl ListError {
    /// Wrap an I/O error with a short description of the failing operation.
    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
