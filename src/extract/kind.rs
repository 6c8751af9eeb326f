//! Supported file kinds, keyed by extension.

use std::path::Path;

/// A link-bearing file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// Internet shortcut (`.url`), line-oriented `KEY=value`.
    Shortcut,
    /// Markdown (`.md`).
    Markdown,
    /// HTML (`.html`, `.htm`).
    Html,
    /// Plain text (`.txt`).
    Text,
}

impl FileKind {
    /// Classifies a path by its extension, case-insensitively.
    ///
    /// Returns `None` for anything outside the supported set, including
    /// files without an extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "url" => Some(FileKind::Shortcut),
            "md" => Some(FileKind::Markdown),
            "html" | "htm" => Some(FileKind::Html),
            "txt" => Some(FileKind::Text),
            _ => None,
        }
    }

    /// Whether the path has a supported extension.
    pub fn is_supported(path: &Path) -> bool {
        Self::from_path(path).is_some()
    }
}
