//! Listing configuration.
//!
//! Plain option structs threaded through constructors. There is no
//! configuration file and no environment lookup; callers decide once per
//! run and pass the result down.

/// How a directory's aggregate size is computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraversalMode {
    /// Sum every regular file in the full subtree.
    #[default]
    Deep,

    /// Sum only the regular files directly inside the directory; nested
    /// subdirectories contribute 0. Kept for output compatibility with the
    /// simplest historical variant of the tool.
    Shallow,
}

/// Options for one listing run.
#[derive(Clone, Copy, Debug, Default)]
pub struct ListOptions {
    /// Directory size aggregation mode.
    pub traversal: TraversalMode,

    /// Whether entry names are wrapped in ANSI color escapes.
    pub color_enabled: bool,
}
