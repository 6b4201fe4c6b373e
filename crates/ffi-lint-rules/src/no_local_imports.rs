//! Rule forbidding local imports in FFI stub files.
//!
//! # Rationale
//!
//! An FFI file that imports a local project file pulls project logic behind
//! the FFI boundary, out of reach of the host language. Only external
//! packages and platform builtins may be imported. Three import mechanisms
//! are covered, each with its own message so callers get mechanism-specific
//! guidance: static `import` declarations, `require(..)` calls, and dynamic
//! `import(..)` expressions.
//!
//! Classification is purely lexical on the specifier string: no filesystem
//! lookup, no package-manifest inspection, no path-alias resolution. A
//! project alias such as `@app/utils` that points at a local file is not
//! caught. Non-literal specifiers (`require(name)`, `import(expr)`) are not
//! evaluated and are silently allowed.

use ffi_lint_core::{
    messages, node_text, string_literal_value, NodeKind, Rule, RuleContext, Severity,
};
use tree_sitter::Node;

/// Rule code for no-local-imports.
pub const CODE: &str = "FFI002";

/// Rule name for no-local-imports.
pub const NAME: &str = "no-local-imports";

/// Classifies an import specifier as local.
///
/// A specifier is local iff it starts with `./` or `../`. Everything else,
/// including bare package names, scoped packages, absolute paths, and
/// `node:`-prefixed builtins, is external.
#[must_use]
pub fn is_local_import(specifier: &str) -> bool {
    specifier.starts_with("./") || specifier.starts_with("../")
}

/// Flags import mechanisms whose target is a local relative file.
#[derive(Debug, Clone)]
pub struct NoLocalImports {
    severity: Severity,
}

impl Default for NoLocalImports {
    fn default() -> Self {
        Self::new()
    }
}

impl NoLocalImports {
    /// Creates the rule with its default severity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn check_import_statement(ctx: &mut RuleContext<'_>, node: &Node<'_>) {
        let Some(source) = node.child_by_field_name("source") else {
            return;
        };
        let Some(specifier) = string_literal_value(&source, ctx.source()) else {
            return;
        };
        if is_local_import(&specifier) {
            ctx.report(node, messages::NO_LOCAL_IMPORT, &[("source", &specifier)]);
        }
    }

    fn check_call_expression(ctx: &mut RuleContext<'_>, node: &Node<'_>) {
        let Some(callee) = node.child_by_field_name("function") else {
            return;
        };

        let message_id = match callee.kind() {
            // Dynamic `import(..)` parses with a dedicated callee kind.
            "import" => messages::NO_LOCAL_DYNAMIC_IMPORT,
            "identifier" if node_text(&callee, ctx.source()) == "require" => {
                messages::NO_LOCAL_REQUIRE
            }
            _ => return,
        };

        // Only a literal string first argument is classifiable; computed
        // specifiers pass silently.
        let Some(specifier) = first_string_argument(node, ctx.source()) else {
            return;
        };
        if is_local_import(&specifier) {
            ctx.report(node, message_id, &[("source", &specifier)]);
        }
    }
}

/// Extracts the first argument of a call when it is a plain string literal.
fn first_string_argument(call: &Node<'_>, src: &[u8]) -> Option<String> {
    let arguments = call.child_by_field_name("arguments")?;
    let first = arguments.named_child(0)?;
    string_literal_value(&first, src)
}

impl Rule for NoLocalImports {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids importing or requiring local project files from FFI files"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn node_kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::ImportStatement, NodeKind::CallExpression]
    }

    fn check_node(&self, ctx: &mut RuleContext<'_>, node: &Node<'_>) {
        match NodeKind::from_grammar(node.kind()) {
            Some(NodeKind::ImportStatement) => Self::check_import_statement(ctx, node),
            Some(NodeKind::CallExpression) => Self::check_call_expression(ctx, node),
            _ => {}
        }
    }
}
