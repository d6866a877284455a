//! po-extract - localizable string extraction for C# projects
//!
//! po-extract is a CLI tool and library that scans the C# source files of a
//! project, locates calls that request translation of a human-readable string
//! (localizer indexers, plural calls, `[Display]` attribute arguments, ...),
//! and collects every occurrence into a deduplicated, insertion-ordered
//! collection suitable for writing out as a gettext PO template.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `error`: Error taxonomy for the extraction core
//! - `extractors`: Pluggable pattern matchers, one per localization call shape
//! - `location`: Base-path-relative source locations
//! - `occurrence`: Occurrence data model and the deduplicating collection
//! - `parser`: C# parsing and string-literal decoding (tree-sitter)
//! - `po`: PO template serialization
//! - `processor`: Per-project orchestration (enumerate, parse, walk, collect)
//! - `report`: Human-readable scan summaries
//! - `scanner`: Deterministic source file enumeration
//! - `semantics`: Per-file static type resolution for the localizer type
//! - `walker`: Preorder syntax tree traversal driving the extractors

pub mod cli;
pub mod error;
pub mod extractors;
pub mod location;
pub mod occurrence;
pub mod parser;
pub mod po;
pub mod processor;
pub mod report;
pub mod scanner;
pub mod semantics;
pub mod walker;
