//! Preorder syntax tree traversal driving the extractors.

use tree_sitter::Node;

use crate::error::ExtractError;
use crate::extractors::{Extract, Extractor, FileContext};
use crate::occurrence::LocalizableStringCollection;

/// Walks one file's tree, offering every node to every registered extractor.
///
/// Visits a node before its children, children left to right. The walker
/// does not enforce mutual exclusivity between extractors; a node carrying
/// several recognized attribute arguments records one occurrence per
/// matching extractor. Traversal always descends into children regardless of
/// match outcome, since localization calls nest arbitrarily deep inside
/// argument lists and initializers.
pub struct ExtractingWalker<'a> {
    extractors: &'a [Extractor],
    collection: &'a mut LocalizableStringCollection,
}

impl<'a> ExtractingWalker<'a> {
    pub fn new(
        extractors: &'a [Extractor],
        collection: &'a mut LocalizableStringCollection,
    ) -> Self {
        Self {
            extractors,
            collection,
        }
    }

    /// Walk the tree rooted at `root`. A malformed localization call aborts
    /// the walk immediately with the offending location.
    pub fn walk(&mut self, root: Node<'_>, ctx: &FileContext<'_>) -> Result<(), ExtractError> {
        for extractor in self.extractors {
            if let Some(occurrence) = extractor.try_extract(root, ctx)? {
                self.collection.add(occurrence);
            }
        }

        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            self.walk(child, ctx)?;
        }
        Ok(())
    }
}
