//! Syntax-node kind model over tree-sitter grammar kinds.
//!
//! Rules register interest in [`NodeKind`] variants; the host traversal maps
//! each visited tree-sitter node's grammar kind string through
//! [`NodeKind::from_grammar`] and dispatches to interested rules. Nodes whose
//! kind has no variant here are never shown to rules.

use tree_sitter::Node;

/// Syntax constructs a rule can register interest in.
///
/// Variants follow the JavaScript grammar of `tree-sitter-javascript`. One
/// variant can cover several grammar kinds when rules never need to tell them
/// apart (function and generator declarations, `for..in` and `for..of`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// `function f() {}` or `function* f() {}` declarations (never arrows).
    FunctionDeclaration,
    /// `if` / `else` statements.
    IfStatement,
    /// C-style `for (;;)` loops.
    ForStatement,
    /// `for..in` and `for..of` loops.
    ForInStatement,
    /// `while` loops.
    WhileStatement,
    /// `do..while` loops.
    DoStatement,
    /// Conditional (ternary) expressions.
    TernaryExpression,
    /// `switch` statements.
    SwitchStatement,
    /// Any call expression, including `require(..)` and dynamic `import(..)`.
    CallExpression,
    /// Static `import .. from ".."` declarations.
    ImportStatement,
}

impl NodeKind {
    /// Maps a tree-sitter grammar kind string to a [`NodeKind`].
    ///
    /// Returns `None` for kinds no rule can register interest in.
    #[must_use]
    pub fn from_grammar(kind: &str) -> Option<Self> {
        match kind {
            "function_declaration" | "generator_function_declaration" => {
                Some(Self::FunctionDeclaration)
            }
            "if_statement" => Some(Self::IfStatement),
            "for_statement" => Some(Self::ForStatement),
            "for_in_statement" => Some(Self::ForInStatement),
            "while_statement" => Some(Self::WhileStatement),
            "do_statement" => Some(Self::DoStatement),
            "ternary_expression" => Some(Self::TernaryExpression),
            "switch_statement" => Some(Self::SwitchStatement),
            "call_expression" => Some(Self::CallExpression),
            "import_statement" => Some(Self::ImportStatement),
            _ => None,
        }
    }

    /// Returns true for the loop statement variants.
    #[must_use]
    pub fn is_loop(self) -> bool {
        matches!(
            self,
            Self::ForStatement | Self::ForInStatement | Self::WhileStatement | Self::DoStatement
        )
    }
}

/// Visits every node of a tree in preorder, exactly once.
///
/// This is the traversal order the host guarantees to rules: parents before
/// children, siblings left to right.
pub fn for_each_node<F: FnMut(Node<'_>)>(root: Node<'_>, mut f: F) {
    let mut cursor = root.walk();
    loop {
        f(cursor.node());

        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}

/// Returns the source text of a node, or `""` on invalid UTF-8.
#[must_use]
pub fn node_text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
    node.utf8_text(src).unwrap_or("")
}

/// Extracts the value of a string literal node.
///
/// Returns `None` when the node is not a plain `string` literal (template
/// strings and computed expressions are not classifiable). The value is the
/// concatenation of the literal's fragments with the surrounding quotes
/// stripped; escape sequences are kept as written since import specifiers are
/// compared lexically.
#[must_use]
pub fn string_literal_value(node: &Node<'_>, src: &[u8]) -> Option<String> {
    if node.kind() != "string" {
        return None;
    }

    let mut value = String::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "string_fragment" | "escape_sequence" => value.push_str(node_text(&child, src)),
            _ => {}
        }
    }
    Some(value)
}
