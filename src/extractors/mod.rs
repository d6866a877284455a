//! Pluggable extraction strategies, one per localization call shape.
//!
//! Each extractor recognizes exactly one syntactic (or semantic) pattern and
//! produces at most one occurrence per node. The walker offers every node to
//! every registered extractor; new patterns are added by appending a variant
//! here, never by touching the walker.

mod attributes;
mod calls;
mod localizer_index;


use std::path::Path;

use enum_dispatch::enum_dispatch;
use tree_sitter::Node;

pub use attributes::{
    DisplayDescriptionExtractor, DisplayGroupNameExtractor, DisplayNameExtractor,
    DisplayShortNameExtractor, ErrorMessageAnnotationExtractor,
};
pub use calls::{PluralCallExtractor, SingularCallExtractor};
pub use localizer_index::LocalizerIndexExtractor;

use crate::error::ExtractError;
use crate::location::LocationResolver;
use crate::occurrence::LocalizableOccurrence;
use crate::parser::node_text;
use crate::semantics::FileTypeContext;

/// Per-file state shared by all extractors during one walk.
pub struct FileContext<'a> {
    pub source: &'a str,
    pub file: &'a Path,
    pub locations: &'a LocationResolver,
    /// Present only when the configured extractor set needs type resolution.
    pub types: Option<&'a FileTypeContext>,
}

/// Capability implemented by every extraction strategy.
///
/// `Ok(Some(..))` is a match, `Ok(None)` means the node is irrelevant to
/// this strategy, and `Err(..)` means the node has the recognizable shape of
/// a localization call but violates a hard constraint.
#[enum_dispatch]
pub trait Extract {
    fn try_extract(
        &self,
        node: Node<'_>,
        ctx: &FileContext<'_>,
    ) -> Result<Option<LocalizableOccurrence>, ExtractError>;
}

/// The closed set of extraction strategies.
#[enum_dispatch(Extract)]
pub enum Extractor {
    LocalizerIndex(LocalizerIndexExtractor),
    SingularCall(SingularCallExtractor),
    PluralCall(PluralCallExtractor),
    ErrorMessageAnnotation(ErrorMessageAnnotationExtractor),
    DisplayDescription(DisplayDescriptionExtractor),
    DisplayName(DisplayNameExtractor),
    DisplayGroupName(DisplayGroupNameExtractor),
    DisplayShortName(DisplayShortNameExtractor),
}

/// Build an occurrence for a matched node, resolving its context and
/// location once.
fn occurrence_at(
    msg_id: String,
    plural_id: Option<String>,
    node: Node<'_>,
    ctx: &FileContext<'_>,
) -> LocalizableOccurrence {
    LocalizableOccurrence {
        msg_id,
        plural_id,
        context: enclosing_context(node, ctx.source),
        location: ctx.locations.resolve(node, ctx.file),
    }
}

/// Grouping discriminator for a node: the dotted names of its enclosing
/// namespaces and type declarations (e.g. `MyApp.Pages.IndexModel`).
fn enclosing_context(node: Node<'_>, source: &str) -> Option<String> {
    let mut names = Vec::new();
    let mut current = node.parent();

    while let Some(ancestor) = current {
        match ancestor.kind() {
            "class_declaration"
            | "struct_declaration"
            | "record_declaration"
            | "interface_declaration"
            | "enum_declaration"
            | "namespace_declaration"
            | "file_scoped_namespace_declaration" => {
                if let Some(name) = ancestor.child_by_field_name("name") {
                    names.push(node_text(name, source).to_string());
                }
            }
            _ => {}
        }
        current = ancestor.parent();
    }

    if names.is_empty() {
        return None;
    }
    names.reverse();
    Some(names.join("."))
}

/// Base expression of an element access (`expr[...]`).
fn index_target(node: Node<'_>) -> Option<Node<'_>> {
    node.child_by_field_name("expression")
        .or_else(|| node.named_child(0))
}

/// Argument expressions of an element access, in order.
fn index_arguments(node: Node<'_>) -> Vec<Node<'_>> {
    let list = node.child_by_field_name("subscript").or_else(|| {
        let mut cursor = node.walk();
        node.named_children(&mut cursor)
            .find(|c| c.kind() == "bracketed_argument_list")
    });
    list.map(argument_expressions).unwrap_or_default()
}

/// Argument expressions of an invocation, in order.
fn invocation_arguments(node: Node<'_>) -> Vec<Node<'_>> {
    node.child_by_field_name("arguments")
        .map(argument_expressions)
        .unwrap_or_default()
}

fn argument_expressions(list: Node<'_>) -> Vec<Node<'_>> {
    let mut out = Vec::new();
    let mut cursor = list.walk();
    for argument in list.named_children(&mut cursor) {
        if argument.kind() != "argument" {
            continue;
        }
        // The expression is the last named child; earlier children are
        // name colons or ref modifiers.
        let mut expr = None;
        let mut arg_cursor = argument.walk();
        for child in argument.named_children(&mut arg_cursor) {
            expr = Some(child);
        }
        if let Some(expr) = expr {
            out.push(expr);
        }
    }
    out
}
