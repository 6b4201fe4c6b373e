//! JavaScript parsing via tree-sitter.

use thiserror::Error;
use tree_sitter::{Language, Parser, Tree};

/// File extensions treated as JavaScript sources.
pub const JS_EXTENSIONS: &[&str] = &[".js", ".mjs", ".cjs", ".jsx"];

/// Errors produced while parsing a source text.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The grammar could not be loaded into the parser.
    #[error("failed to load javascript grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// The parser yielded no tree (cancellation or timeout).
    #[error("parser produced no syntax tree")]
    NoTree,
}

/// Parses JavaScript source into a tree-sitter syntax tree.
///
/// A malformed input still yields a tree containing error nodes; rules only
/// match well-formed constructs, so partial trees degrade to fewer matches
/// rather than failures.
pub struct JsParser {
    language: Language,
}

impl JsParser {
    /// Creates a new JavaScript parser.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_javascript::LANGUAGE.into(),
        }
    }

    /// Parses a source text.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar cannot be loaded or the parser yields
    /// no tree.
    pub fn parse(&self, source: &str) -> Result<Tree, ParseError> {
        let mut parser = Parser::new();
        parser.set_language(&self.language)?;
        parser.parse(source, None).ok_or(ParseError::NoTree)
    }
}

impl Default for JsParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_source() {
        let tree = JsParser::new().parse("export const f = (x) => lib.call(x);");
        let tree = tree.expect("parse failed");
        assert_eq!(tree.root_node().kind(), "program");
        assert!(!tree.root_node().has_error());
    }

    #[test]
    fn malformed_source_still_yields_tree() {
        let tree = JsParser::new().parse("function (((");
        let tree = tree.expect("parse failed");
        assert!(tree.root_node().has_error());
    }

    #[test]
    fn empty_source_is_fine() {
        let tree = JsParser::new().parse("").expect("parse failed");
        assert_eq!(tree.root_node().named_child_count(), 0);
    }
}
