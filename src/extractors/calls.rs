//! Syntax-only call-shape extraction: `T["..."]` and `T.Plural(...)`.
//!
//! These match by naming convention alone, without type resolution. A
//! non-literal argument is a no-match here; only the semantic indexer
//! extractor can tell a malformed localizer call from an unrelated index
//! access.

use tree_sitter::Node;

use super::{
    Extract, FileContext, index_arguments, index_target, invocation_arguments, occurrence_at,
};
use crate::error::ExtractError;
use crate::occurrence::LocalizableOccurrence;
use crate::parser::{node_text, string_literal_value};

/// Identifiers conventionally bound to a localizer.
const LOCALIZER_IDENTIFIERS: &[&str] = &["T", "S"];

/// Name of the plural localization method.
const PLURAL_METHOD: &str = "Plural";

fn is_localizer_identifier(node: Node<'_>, source: &str) -> bool {
    node.kind() == "identifier" && LOCALIZER_IDENTIFIERS.contains(&node_text(node, source))
}

/// Matches the singular convention `T["Text to translate"]`.
#[derive(Debug, Default)]
pub struct SingularCallExtractor;

impl Extract for SingularCallExtractor {
    fn try_extract(
        &self,
        node: Node<'_>,
        ctx: &FileContext<'_>,
    ) -> Result<Option<LocalizableOccurrence>, ExtractError> {
        if node.kind() != "element_access_expression" {
            return Ok(None);
        }
        let target_matches =
            index_target(node).is_some_and(|t| is_localizer_identifier(t, ctx.source));
        if !target_matches {
            return Ok(None);
        }

        let arguments = index_arguments(node);
        let Some(value) = arguments
            .first()
            .and_then(|arg| string_literal_value(*arg, ctx.source))
        else {
            return Ok(None);
        };
        if value.is_empty() {
            return Ok(None);
        }

        Ok(Some(occurrence_at(value, None, node, ctx)))
    }
}

/// Matches the plural convention `T.Plural(count, "singular", "plural")`,
/// extracting both literal forms.
#[derive(Debug, Default)]
pub struct PluralCallExtractor;

impl Extract for PluralCallExtractor {
    fn try_extract(
        &self,
        node: Node<'_>,
        ctx: &FileContext<'_>,
    ) -> Result<Option<LocalizableOccurrence>, ExtractError> {
        if node.kind() != "invocation_expression" {
            return Ok(None);
        }
        let Some(function) = node.child_by_field_name("function") else {
            return Ok(None);
        };
        if function.kind() != "member_access_expression" {
            return Ok(None);
        }
        let name_matches = function
            .child_by_field_name("name")
            .is_some_and(|n| node_text(n, ctx.source) == PLURAL_METHOD);
        let target_matches = function
            .child_by_field_name("expression")
            .is_some_and(|t| is_localizer_identifier(t, ctx.source));
        if !name_matches || !target_matches {
            return Ok(None);
        }

        // Plural(count, "singular", "plural"): the count comes first.
        let arguments = invocation_arguments(node);
        let singular = arguments
            .get(1)
            .and_then(|arg| string_literal_value(*arg, ctx.source));
        let plural = arguments
            .get(2)
            .and_then(|arg| string_literal_value(*arg, ctx.source));

        match (singular, plural) {
            (Some(singular), Some(plural)) if !singular.is_empty() => {
                Ok(Some(occurrence_at(singular, Some(plural), node, ctx)))
            }
            _ => Ok(None),
        }
    }
}
