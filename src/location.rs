//! Source locations relative to a project base path.

use std::path::{Component, Path, PathBuf};

use tree_sitter::Node;

/// Position of an extracted string in the scanned sources.
///
/// The file path is stored relative to the base path with forward slashes so
/// reference comments in the PO output are identical across platforms.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceLocation {
    /// Path to the source file, relative to the base path.
    pub file: String,
    /// Line number (1-indexed).
    pub line: usize,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

/// Computes [`SourceLocation`]s for syntax nodes, anchored at a base path.
#[derive(Debug, Clone)]
pub struct LocationResolver {
    base_path: PathBuf,
}

impl LocationResolver {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Resolve the location of `node` inside `file`.
    ///
    /// Files outside the base path keep their full path rather than failing;
    /// provenance is still meaningful, just not relative.
    pub fn resolve(&self, node: Node<'_>, file: &Path) -> SourceLocation {
        let relative = file.strip_prefix(&self.base_path).unwrap_or(file);
        let display = relative
            .components()
            .filter(|c| matches!(c, Component::Normal(_)))
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        SourceLocation::new(display, node.start_position().row + 1)
    }
}
