//! Colored rendering of listing lines.
//!
//! Color selection is injected as an [`OutputStyle`] value rather than read
//! from process-wide constants, so rendering stays deterministic in tests
//! when colors are disabled. Each entry kind maps to one foreground color:
//! dark blue for directories, cyan for regular files, green for everything
//! else, reset to the default after the name token.

use colored::{Color, Colorize};

use crate::entry::{Entry, EntryKind};

/// Foreground color for a given entry kind.
#[must_use]
pub const fn kind_color(kind: EntryKind) -> Color {
    match kind {
        EntryKind::Directory => Color::Blue,
        EntryKind::RegularFile => Color::Cyan,
        EntryKind::Other => Color::Green,
    }
}

/// Rendering configuration for listing lines.
#[derive(Clone, Copy, Debug, Default)]
pub struct OutputStyle {
    /// When `false`, names are rendered without any escape sequences.
    pub color_enabled: bool,
}

impl OutputStyle {
    /// Create a style with color explicitly enabled or disabled.
    #[must_use]
    pub const fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Wrap `text` in the foreground color for `kind`.
    #[must_use]
    pub fn paint(self, kind: EntryKind, text: &str) -> String {
        if self.color_enabled {
            text.color(kind_color(kind)).to_string()
        } else {
            text.to_string()
        }
    }

    /// Render one listing line: the painted name followed by its size
    /// label in parentheses.
    #[must_use]
    pub fn render_line(self, entry: &Entry, size_label: &str) -> String {
        format!("{} ({size_label})", self.paint(entry.kind, &entry.name))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn entry(name: &str, kind: EntryKind) -> Entry {
        Entry {
            name: name.to_string(),
            kind,
            path: PathBuf::from(name),
        }
    }

    #[test]
    fn test_disabled_style_renders_plain_text() {
        let style = OutputStyle::new(false);

        assert_eq!(style.paint(EntryKind::Directory, "docs"), "docs");
        assert_eq!(
            style.render_line(&entry("docs", EntryKind::Directory), "Empty"),
            "docs (Empty)"
        );
    }

    #[test]
    fn test_enabled_style_wraps_names_in_kind_colors() {
        // colored suppresses escapes when it thinks stdout is not a tty,
        // so force them on for this test only
        colored::control::set_override(true);

        let style = OutputStyle::new(true);

        let dir = style.paint(EntryKind::Directory, "docs");
        let file = style.paint(EntryKind::RegularFile, "notes.txt");
        let other = style.paint(EntryKind::Other, "pipe");

        assert!(dir.starts_with("\u{1b}[34m"), "directory not blue: {dir:?}");
        assert!(file.starts_with("\u{1b}[36m"), "file not cyan: {file:?}");
        assert!(other.starts_with("\u{1b}[32m"), "other not green: {other:?}");

        for painted in [&dir, &file, &other] {
            assert!(painted.ends_with("\u{1b}[0m"), "missing reset: {painted:?}");
        }

        colored::control::unset_override();
    }

    #[test]
    fn test_render_line_keeps_size_label_outside_the_colored_span() {
        let style = OutputStyle::new(true);
        let line = style.render_line(&entry("data.bin", EntryKind::RegularFile), "2 KB");

        // The size label is appended after the reset, whether or not the
        // escapes themselves were emitted
        assert!(line.ends_with(" (2 KB)"));
    }
}
