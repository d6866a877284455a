//! C# parsing and string-literal decoding.
//!
//! Thin wrapper over tree-sitter with the C# grammar. The rest of the crate
//! only needs node kinds, child enumeration, node text, and decoded string
//! literal values; everything else stays behind this module.

use std::path::Path;

use tree_sitter::{Node, Parser, Tree};

use crate::error::ExtractError;

/// Parse C# source text into a syntax tree.
///
/// A fresh parser is built per call; parsing state never leaks between
/// files, so a broken file cannot corrupt analysis of the next one.
pub fn parse_csharp_source(code: &str, file: &Path) -> Result<Tree, ExtractError> {
    let mut parser = Parser::new();
    parser.set_language(&tree_sitter_c_sharp::LANGUAGE.into())?;
    parser.parse(code, None).ok_or_else(|| ExtractError::Parse {
        file: file.to_path_buf(),
    })
}

/// Text of `node` as written in the source.
pub fn node_text<'a>(node: Node<'_>, source: &'a str) -> &'a str {
    &source[node.byte_range()]
}

/// Decoded value of a string literal node, or `None` when the node is not a
/// string literal.
///
/// Handles regular (`"..."`), verbatim (`@"..."`), and raw (`"""..."""`)
/// literals. Interpolated strings are a different node kind and therefore
/// never classified as literals.
pub fn string_literal_value(node: Node<'_>, source: &str) -> Option<String> {
    match node.kind() {
        "string_literal" | "verbatim_string_literal" | "raw_string_literal" => {
            unquote_string_literal(node_text(node, source))
        }
        _ => None,
    }
}

fn unquote_string_literal(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Verbatim: @"..." with doubled quotes as the only escape.
    if let Some(rest) = trimmed.strip_prefix("@\"") {
        let body = rest.strip_suffix('"')?;
        return Some(body.replace("\"\"", "\""));
    }

    // Raw: three or more quotes on each side, no escapes.
    let quote_count = trimmed.chars().take_while(|ch| *ch == '"').count();
    if quote_count >= 3 && trimmed.ends_with(&"\"".repeat(quote_count)) {
        let start = quote_count;
        let end = trimmed.len() - quote_count;
        if start <= end {
            return Some(trimmed[start..end].to_string());
        }
        return None;
    }

    // Regular: "..." with backslash escapes.
    let body = trimmed.strip_prefix('"')?.strip_suffix('"')?;
    Some(decode_escapes(body))
}

fn decode_escapes(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push_str("\\u");
                        out.push_str(&hex);
                    }
                }
            }
            // Unknown escape: keep it verbatim rather than guessing.
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}
