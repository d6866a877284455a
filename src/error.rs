//! Error taxonomy for the extraction core.
//!
//! All failures here are deterministic given the same input; none are
//! transient, so there is no retry machinery. A scan that fails leaves the
//! collection in an unspecified partial state that callers must not trust.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while scanning a project for localizable strings.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// An empty or otherwise unusable argument, rejected before any file is
    /// read.
    #[error("{0}")]
    InvalidArgument(String),

    /// A directory or file could not be read. Fatal for the whole scan: a
    /// partially scanned project risks shipping untranslated strings.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The C# grammar could not be loaded into the parser.
    #[error("failed to load the C# grammar")]
    Language(#[from] tree_sitter::LanguageError),

    /// The parser produced no syntax tree for a file.
    #[error("failed to parse {}", file.display())]
    Parse { file: PathBuf },

    /// A node has the shape of a localizer index access but its argument is
    /// not a string literal. Fatal: skipping it would silently drop a string
    /// the author marked as translatable.
    #[error("localizer index argument is not a string literal at {file}:{line}")]
    MalformedCall { file: String, line: usize },
}
