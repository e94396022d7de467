//! One-level directory listing.
//!
//! The lister enumerates the immediate children of a single directory,
//! classifies and orders them, and renders one line per entry. Listing
//! never descends into subdirectories — measuring a child directory's
//! aggregate size does (see [`crate::utils::size::dir_size`]), but the
//! children of children are never *displayed*.

use std::fs;
use std::path::Path;

use crate::config::ListOptions;
use crate::entry::{Entry, EntryKind, sort_entries};
use crate::error::ListError;
use crate::output::OutputStyle;
use crate::utils::size::{dir_size, format_dir_size, format_size};

/// Renders the immediate children of one directory.
#[derive(Debug)]
pub struct Lister {
    /// Traversal and color options for this run.
    options: ListOptions,

    /// Rendering style derived from the options.
    style: OutputStyle,
}

impl Lister {
    /// Create a lister with the given options.
    #[must_use]
    pub const fn new(options: ListOptions) -> Self {
        Self {
            options,
            style: OutputStyle::new(options.color_enabled),
        }
    }

    /// Enumerate, classify, and sort the immediate children of `dir`.
    ///
    /// The directory handle lives only as long as the enumeration pass;
    /// children whose directory entries cannot be read are skipped rather
    /// than aborting the listing.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Io`] when `dir` itself cannot be enumerated
    /// (missing, unreadable, or not a directory).
    pub fn collect_entries(dir: &Path) -> Result<Vec<Entry>, ListError> {
        let children = fs::read_dir(dir).map_err(|source| {
            ListError::io(format!("Failed to read directory {}", dir.display()), source)
        })?;

        let mut entries: Vec<Entry> = children
            .filter_map(Result::ok)
            .map(|child| Entry::from_path(child.path()))
            .collect();

        sort_entries(&mut entries);

        Ok(entries)
    }

    /// Compute the size label for one entry.
    ///
    /// Directories aggregate their subtree and collapse zero to `"Empty"`;
    /// regular files show their own length (`"0 KB"` for a zero-byte file);
    /// anything else is never size-queried and shows `"N/A"`.
    #[must_use]
    pub fn size_label(&self, entry: &Entry) -> String {
        match entry.kind {
            EntryKind::Directory => {
                format_dir_size(dir_size(&entry.path, self.options.traversal))
            }
            EntryKind::RegularFile => {
                // A file that vanished between enumeration and stat degrades
                // to zero rather than failing the whole listing
                let bytes = fs::metadata(&entry.path).map_or(0, |metadata| metadata.len());
                format_size(bytes)
            }
            EntryKind::Other => "N/A".to_string(),
        }
    }

    /// List `dir`, returning one rendered line per immediate child in
    /// display order.
    ///
    /// The lister performs no output itself; the caller decides where the
    /// lines go.
    ///
    /// # Errors
    ///
    /// Propagates enumeration failures from [`Lister::collect_entries`].
    pub fn list_directory(&self, dir: &Path) -> Result<Vec<String>, ListError> {
        let entries = Self::collect_entries(dir)?;

        Ok(entries
            .iter()
            .map(|entry| self.style.render_line(entry, &self.size_label(entry)))
            .collect())
    }
}
