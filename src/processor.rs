//! Per-project orchestration: enumerate, parse, walk, collect.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ExtractError;
use crate::extractors::{
    DisplayDescriptionExtractor, DisplayGroupNameExtractor, DisplayNameExtractor,
    DisplayShortNameExtractor, ErrorMessageAnnotationExtractor, Extractor, FileContext,
    LocalizerIndexExtractor, PluralCallExtractor, SingularCallExtractor,
};
use crate::location::LocationResolver;
use crate::occurrence::LocalizableStringCollection;
use crate::parser::parse_csharp_source;
use crate::scanner::scan_files;
use crate::semantics::FileTypeContext;
use crate::walker::ExtractingWalker;

/// Which extractor set a processor runs with. A fixed configuration choice,
/// not discovered at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    /// Fast call-shape and attribute matching by naming convention only.
    Syntactic,
    /// Precise: replaces the name-convention singular match with the
    /// type-verified localizer indexer. Slower, since every file gets a
    /// type-resolution pass.
    Semantic,
}

impl ExtractionMode {
    fn extractors(self) -> Vec<Extractor> {
        let mut set: Vec<Extractor> = match self {
            ExtractionMode::Syntactic => vec![SingularCallExtractor.into()],
            ExtractionMode::Semantic => vec![LocalizerIndexExtractor.into()],
        };
        set.extend([
            PluralCallExtractor.into(),
            ErrorMessageAnnotationExtractor.into(),
            DisplayDescriptionExtractor.into(),
            DisplayNameExtractor.into(),
            DisplayGroupNameExtractor.into(),
            DisplayShortNameExtractor.into(),
        ]);
        set
    }

    fn needs_type_resolution(self) -> bool {
        matches!(self, ExtractionMode::Semantic)
    }
}

/// Extracts localizable strings from all `*.cs` files under a project path.
///
/// Owns the scan configuration; the caller owns the collection and receives
/// it fully populated. Processing is single-threaded and sequential: files
/// are handled one at a time in sorted order, and no state is shared across
/// files except the append-only collection.
pub struct ProjectProcessor {
    base_path: PathBuf,
    mode: ExtractionMode,
}

impl ProjectProcessor {
    pub fn new(base_path: impl Into<PathBuf>, mode: ExtractionMode) -> Self {
        Self {
            base_path: base_path.into(),
            mode,
        }
    }

    /// Scan `project_path`, accumulating every occurrence into `strings`.
    ///
    /// Fails before reading any file when either path is empty. Any I/O,
    /// parse, or malformed-call failure aborts the whole run; the collection
    /// must not be trusted after an error.
    pub fn process(
        &self,
        project_path: &Path,
        strings: &mut LocalizableStringCollection,
    ) -> Result<(), ExtractError> {
        if project_path.as_os_str().is_empty() {
            return Err(ExtractError::InvalidArgument(
                "project path cannot be empty".to_string(),
            ));
        }
        if self.base_path.as_os_str().is_empty() {
            return Err(ExtractError::InvalidArgument(
                "base path cannot be empty".to_string(),
            ));
        }

        let extractors = self.mode.extractors();
        let locations = LocationResolver::new(&self.base_path);

        for file in scan_files(project_path)? {
            let code = fs::read_to_string(&file).map_err(|source| ExtractError::Io {
                path: file.clone(),
                source,
            })?;
            let tree = parse_csharp_source(&code, &file)?;
            let root = tree.root_node();

            // Ephemeral per-file context; dropped before the next file.
            let types = self
                .mode
                .needs_type_resolution()
                .then(|| FileTypeContext::build(root, &code));

            let ctx = FileContext {
                source: &code,
                file: &file,
                locations: &locations,
                types: types.as_ref(),
            };
            ExtractingWalker::new(&extractors, strings).walk(root, &ctx)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_project_path_is_rejected_before_reading() {
        let processor = ProjectProcessor::new("/base", ExtractionMode::Syntactic);
        let mut strings = LocalizableStringCollection::new();

        let err = processor.process(Path::new(""), &mut strings).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidArgument(_)));
        assert!(strings.is_empty());
    }

    #[test]
    fn empty_base_path_is_rejected_before_reading() {
        let processor = ProjectProcessor::new("", ExtractionMode::Syntactic);
        let mut strings = LocalizableStringCollection::new();

        let err = processor
            .process(Path::new("/some/project"), &mut strings)
            .unwrap_err();
        assert!(matches!(err, ExtractError::InvalidArgument(_)));
        assert!(strings.is_empty());
    }
}
