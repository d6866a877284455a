//! Attribute-argument extraction: `[Display(Name = "...")]` and validation
//! attribute `ErrorMessage` arguments.
//!
//! Purely syntactic; no type resolution involved. Non-literal attribute
//! arguments are a no-match, not an error.

use tree_sitter::Node;

use super::{Extract, FileContext, occurrence_at};
use crate::error::ExtractError;
use crate::occurrence::LocalizableOccurrence;
use crate::parser::{node_text, string_literal_value};

const DISPLAY_ATTRIBUTE: &str = "Display";

/// Short attribute names may also be written with the `Attribute` suffix.
fn attribute_name_matches(node: Node<'_>, source: &str, expected: &str) -> bool {
    let written = node_text(node, source);
    let simple = written.rsplit('.').next().unwrap_or(written);
    simple == expected || simple.strip_suffix("Attribute") == Some(expected)
}

/// Decoded value of the named argument `name` on attribute node `attr`,
/// when that argument is a string literal.
fn named_argument_value(attr: Node<'_>, source: &str, name: &str) -> Option<String> {
    let mut cursor = attr.walk();
    let list = attr
        .named_children(&mut cursor)
        .find(|c| c.kind() == "attribute_argument_list")?;

    let mut list_cursor = list.walk();
    for argument in list.named_children(&mut list_cursor) {
        if argument.kind() != "attribute_argument" {
            continue;
        }
        if let Some((argument_name, value)) = split_named_argument(argument, source) {
            if argument_name == name {
                return string_literal_value(value, source);
            }
        }
    }
    None
}

/// Split `Name = value` inside an attribute argument.
///
/// The grammar flattens the named form into an `identifier` child, an
/// anonymous `=` token, and the value expression. The `=` check keeps a
/// positional argument that happens to be a bare identifier from being
/// mistaken for a name.
fn split_named_argument<'t, 'a>(argument: Node<'t>, source: &'a str) -> Option<(&'a str, Node<'t>)> {
    let name_node = argument.named_child(0)?;
    if name_node.kind() != "identifier" {
        return None;
    }
    if !argument.child(1).is_some_and(|c| c.kind() == "=") {
        return None;
    }

    let mut value = None;
    let mut cursor = argument.walk();
    for child in argument.named_children(&mut cursor) {
        value = Some(child);
    }
    let value = value?;
    if value.id() == name_node.id() {
        return None;
    }
    Some((node_text(name_node, source), value))
}

fn extract_display_argument(
    node: Node<'_>,
    ctx: &FileContext<'_>,
    argument: &str,
) -> Option<LocalizableOccurrence> {
    if node.kind() != "attribute" {
        return None;
    }
    let name = node.child_by_field_name("name")?;
    if !attribute_name_matches(name, ctx.source, DISPLAY_ATTRIBUTE) {
        return None;
    }
    let value = named_argument_value(node, ctx.source, argument)?;
    if value.is_empty() {
        return None;
    }
    Some(occurrence_at(value, None, node, ctx))
}

macro_rules! display_attribute_extractor {
    ($name:ident, $argument:literal, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Default)]
        pub struct $name;

        impl Extract for $name {
            fn try_extract(
                &self,
                node: Node<'_>,
                ctx: &FileContext<'_>,
            ) -> Result<Option<LocalizableOccurrence>, ExtractError> {
                Ok(extract_display_argument(node, ctx, $argument))
            }
        }
    };
}

display_attribute_extractor!(
    DisplayNameExtractor,
    "Name",
    "Matches `[Display(Name = \"...\")]`."
);
display_attribute_extractor!(
    DisplayDescriptionExtractor,
    "Description",
    "Matches `[Display(Description = \"...\")]`."
);
display_attribute_extractor!(
    DisplayGroupNameExtractor,
    "GroupName",
    "Matches `[Display(GroupName = \"...\")]`."
);
display_attribute_extractor!(
    DisplayShortNameExtractor,
    "ShortName",
    "Matches `[Display(ShortName = \"...\")]`."
);

/// Matches the `ErrorMessage = "..."` named argument on any attribute, the
/// shape used by validation annotations like `[Required]` and
/// `[StringLength]`.
#[derive(Debug, Default)]
pub struct ErrorMessageAnnotationExtractor;

impl Extract for ErrorMessageAnnotationExtractor {
    fn try_extract(
        &self,
        node: Node<'_>,
        ctx: &FileContext<'_>,
    ) -> Result<Option<LocalizableOccurrence>, ExtractError> {
        if node.kind() != "attribute" {
            return Ok(None);
        }
        let Some(value) = named_argument_value(node, ctx.source, "ErrorMessage") else {
            return Ok(None);
        };
        if value.is_empty() {
            return Ok(None);
        }
        Ok(Some(occurrence_at(value, None, node, ctx)))
    }
}
