//! Entry data model, classification, and display ordering.
//!
//! An [`Entry`] represents one immediate child of a listed directory. It is
//! constructed fresh on every listing invocation and discarded once its
//! line has been rendered; entries carry no identity beyond the current
//! call and no relationships to each other.

use std::path::{Path, PathBuf};

/// Classification of a filesystem entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// Resolves to a directory (symlinks followed).
    Directory,

    /// Resolves to a regular file (symlinks followed).
    RegularFile,

    /// Anything else: broken symlinks, devices, sockets, FIFOs.
    Other,
}

impl EntryKind {
    /// Classify a path, following symlinks per the platform default.
    ///
    /// A path that cannot be stat-ed at all (e.g. a symlink to nothing)
    /// classifies as [`EntryKind::Other`].
    #[must_use]
    pub fn of(path: &Path) -> Self {
        if path.is_dir() {
            Self::Directory
        } else if path.is_file() {
            Self::RegularFile
        } else {
            Self::Other
        }
    }

    /// Display rank: directories sort before regular files, regular files
    /// before everything else.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Directory => 0,
            Self::RegularFile => 1,
            Self::Other => 2,
        }
    }
}

/// One immediate child of a listed directory.
#[derive(Clone, Debug)]
pub struct Entry {
    /// Final path component, as displayed.
    pub name: String,

    /// Entry classification.
    pub kind: EntryKind,

    /// Full path, used internally for size queries; never displayed.
    pub path: PathBuf,
}

impl Entry {
    /// Build an entry for `path`, classifying it on the spot.
    #[must_use]
    pub fn from_path(path: PathBuf) -> Self {
        let name = display_name(&path);
        let kind = EntryKind::of(&path);

        Self { name, kind, path }
    }
}

/// Final path component of `path` as a displayable string.
///
/// Falls back to the full path for targets without a file name, such as
/// `/` or paths ending in `..`.
#[must_use]
pub fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Order entries for display: directories first, then regular files, then
/// everything else, with a case-sensitive byte-wise name comparison inside
/// each group.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| {
        a.kind
            .rank()
            .cmp(&b.kind.rank())
            .then_with(|| a.name.cmp(&b.name))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, kind: EntryKind) -> Entry {
        Entry {
            name: name.to_string(),
            kind,
            path: PathBuf::from(name),
        }
    }

    #[test]
    fn test_directories_sort_before_files() {
        let mut entries = vec![
            entry("b.txt", EntryKind::RegularFile),
            entry("A_dir", EntryKind::Directory),
            entry("a.txt", EntryKind::RegularFile),
            entry("B_dir", EntryKind::Directory),
        ];

        sort_entries(&mut entries);

        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["A_dir", "B_dir", "a.txt", "b.txt"]);
    }

    #[test]
    fn test_other_entries_sort_last() {
        let mut entries = vec![
            entry("a_socket", EntryKind::Other),
            entry("z.txt", EntryKind::RegularFile),
            entry("dir", EntryKind::Directory),
        ];

        sort_entries(&mut entries);

        let kinds: Vec<EntryKind> = entries.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            [EntryKind::Directory, EntryKind::RegularFile, EntryKind::Other]
        );
    }

    #[test]
    fn test_name_comparison_is_case_sensitive() {
        // Uppercase sorts before lowercase byte-wise
        let mut entries = vec![
            entry("alpha", EntryKind::RegularFile),
            entry("Beta", EntryKind::RegularFile),
        ];

        sort_entries(&mut entries);

        assert_eq!(entries[0].name, "Beta");
        assert_eq!(entries[1].name, "alpha");
    }

    #[test]
    fn test_display_name_uses_final_component() {
        assert_eq!(display_name(Path::new("/tmp/some/file.txt")), "file.txt");
        assert_eq!(display_name(Path::new("relative/dir")), "dir");
    }

    #[test]
    fn test_display_name_falls_back_to_full_path() {
        assert_eq!(display_name(Path::new("/")), "/");
        assert_eq!(display_name(Path::new("a/..")), "a/..");
    }

    #[test]
    fn test_kind_rank_ordering() {
        assert!(EntryKind::Directory.rank() < EntryKind::RegularFile.rank());
        assert!(EntryKind::RegularFile.rank() < EntryKind::Other.rank());
    }
}
