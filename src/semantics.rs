//! Per-file static type resolution for the localizer type.
//!
//! The semantic indexer extractor needs to know whether the expression being
//! indexed is a localizer before it may treat the index argument as
//! translatable text. A full type checker is out of scope; a per-file pass
//! over declarations is enough to answer exactly that question.
//!
//! The context is rebuilt for every file and discarded afterwards. Nothing
//! is cached across files, so symbols never leak between them and a broken
//! file cannot affect its neighbours.

use std::collections::{HashMap, HashSet};

use tree_sitter::Node;

use crate::parser::node_text;

/// Namespace of the well-known generic localizer type.
pub const LOCALIZER_NAMESPACE: &str = "Microsoft.Extensions.Localization";
/// Simple name of the well-known generic localizer type.
pub const LOCALIZER_TYPE_NAME: &str = "IStringLocalizer";

/// The static type of an expression, stripped of generic arguments.
///
/// `IStringLocalizer<PageA>` and `IStringLocalizer<PageB>` both resolve to
/// the same unbound name; the type argument never matters for extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    /// The type name as written in the declaration, without its generic
    /// argument list (e.g. `IStringLocalizer` or
    /// `Microsoft.Extensions.Localization.IStringLocalizer`).
    pub unbound_name: String,
}

/// Ephemeral analysis context for a single file.
///
/// Collects `using` directives and the declared types of fields, properties,
/// parameters, and local variables. Resolution is by simple name lookup,
/// which is the minimum needed to type an indexed identifier or member
/// access.
#[derive(Debug)]
pub struct FileTypeContext {
    usings: HashSet<String>,
    bindings: HashMap<String, String>,
}

impl FileTypeContext {
    /// Build the context by walking the whole tree once.
    pub fn build(root: Node<'_>, source: &str) -> Self {
        let mut context = Self {
            usings: HashSet::new(),
            bindings: HashMap::new(),
        };
        context.collect(root, source);
        context
    }

    fn collect(&mut self, node: Node<'_>, source: &str) {
        match node.kind() {
            "using_directive" => self.collect_using(node, source),
            "field_declaration" | "local_declaration_statement" => {
                let mut cursor = node.walk();
                for child in node.named_children(&mut cursor) {
                    if child.kind() == "variable_declaration" {
                        self.collect_variable_declaration(child, source);
                    }
                }
            }
            "variable_declaration" => {
                // Reached directly in for-initializers and using statements.
                self.collect_variable_declaration(node, source);
            }
            "property_declaration" | "parameter" => {
                self.collect_typed_name(node, source);
            }
            _ => {}
        }

        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            self.collect(child, source);
        }
    }

    fn collect_using(&mut self, node: Node<'_>, source: &str) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if matches!(
                child.kind(),
                "qualified_name" | "identifier" | "alias_qualified_name"
            ) {
                self.usings.insert(node_text(child, source).to_string());
            }
        }
    }

    fn collect_variable_declaration(&mut self, node: Node<'_>, source: &str) {
        let Some(ty) = node
            .child_by_field_name("type")
            .or_else(|| node.named_child(0))
        else {
            return;
        };
        let type_name = unbound_type_name(ty, source);

        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() == "variable_declarator" {
                if let Some(name) = child.child_by_field_name("name") {
                    self.bindings
                        .insert(node_text(name, source).to_string(), type_name.clone());
                }
            }
        }
    }

    fn collect_typed_name(&mut self, node: Node<'_>, source: &str) {
        let (Some(ty), Some(name)) = (
            node.child_by_field_name("type"),
            node.child_by_field_name("name"),
        ) else {
            return;
        };
        self.bindings.insert(
            node_text(name, source).to_string(),
            unbound_type_name(ty, source),
        );
    }

    /// Resolve the static type of an expression, if it names a declared
    /// symbol in this file.
    ///
    /// Identifiers resolve directly; member accesses resolve by their final
    /// name so `this._localizer` and `_localizer` type identically.
    pub fn resolve_expression_type(&self, node: Node<'_>, source: &str) -> Option<ResolvedType> {
        let name = match node.kind() {
            "identifier" => node_text(node, source),
            "member_access_expression" => {
                node_text(node.child_by_field_name("name")?, source)
            }
            _ => return None,
        };

        self.bindings.get(name).map(|ty| ResolvedType {
            unbound_name: ty.clone(),
        })
    }

    /// Type-identity check against the localizer type, ignoring generic
    /// arguments.
    ///
    /// Accepts the fully-qualified name anywhere, and the simple name when
    /// the file imports the localization namespace.
    pub fn is_localizer(&self, ty: &ResolvedType) -> bool {
        if ty.unbound_name == LOCALIZER_TYPE_NAME {
            return self.usings.contains(LOCALIZER_NAMESPACE);
        }
        ty.unbound_name == format!("{LOCALIZER_NAMESPACE}.{LOCALIZER_TYPE_NAME}")
    }
}

/// Name of a type node with its generic argument list (and any nullable
/// marker) stripped.
fn unbound_type_name(node: Node<'_>, source: &str) -> String {
    let text = node_text(node, source);
    let unbound = text.split('<').next().unwrap_or(text);
    unbound.trim().trim_end_matches('?').to_string()
}
