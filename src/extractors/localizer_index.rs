//! Semantic indexer extraction: `localizer["Text"]` where the static type of
//! `localizer` is the generic localizer type, for any type argument.

use tree_sitter::Node;

use super::{Extract, FileContext, index_arguments, index_target, occurrence_at};
use crate::error::ExtractError;
use crate::occurrence::LocalizableOccurrence;
use crate::parser::string_literal_value;

/// Matches index accesses on expressions whose resolved type is the
/// localizer type, ignoring its generic argument.
///
/// The index argument must be a string literal. An index access on a
/// localizer with any other argument is malformed and fails the whole scan:
/// the author marked the string as translatable, and skipping it would ship
/// it untranslated.
#[derive(Debug, Default)]
pub struct LocalizerIndexExtractor;

impl Extract for LocalizerIndexExtractor {
    fn try_extract(
        &self,
        node: Node<'_>,
        ctx: &FileContext<'_>,
    ) -> Result<Option<LocalizableOccurrence>, ExtractError> {
        if node.kind() != "element_access_expression" {
            return Ok(None);
        }
        let Some(types) = ctx.types else {
            return Ok(None);
        };
        let Some(target) = index_target(node) else {
            return Ok(None);
        };
        let is_localizer = types
            .resolve_expression_type(target, ctx.source)
            .is_some_and(|ty| types.is_localizer(&ty));
        if !is_localizer {
            return Ok(None);
        }

        let arguments = index_arguments(node);
        if let Some(value) = arguments
            .first()
            .and_then(|arg| string_literal_value(*arg, ctx.source))
        {
            if value.is_empty() {
                return Ok(None);
            }
            return Ok(Some(occurrence_at(value, None, node, ctx)));
        }

        let location = ctx.locations.resolve(node, ctx.file);
        Err(ExtractError::MalformedCall {
            file: location.file,
            line: location.line,
        })
    }
}
