//! Rule forbidding computational logic in FFI stub files.
//!
//! # Rationale
//!
//! An FFI file wraps calls into an external library; any branching or data
//! transformation it contains is business logic hidden from the host
//! language's type checker. Syntactic shape is used as a proxy for logic:
//! conditionals, loops, ternaries, switches, non-exported helper functions,
//! and array-transformation method calls are all flagged. The expected stub
//! idiom, `export const f = (x) => () => lib.call(x)`, never triggers since
//! arrow functions and exported declarations are not matched.
//!
//! No semantic, type, or data-flow analysis is performed. A ternary used for
//! a trivial default is a tolerated false positive; logic hidden behind
//! computed member access (`obj["ma" + "p"]`) is a tolerated false negative.

use ffi_lint_core::{messages, NodeKind, Rule, RuleContext, Severity};
use tree_sitter::Node;

/// Rule code for no-logic.
pub const CODE: &str = "FFI001";

/// Rule name for no-logic.
pub const NAME: &str = "no-logic";

/// Array-transformation method names. Membership is tested on the trailing
/// property name only; the receiver type is never verified.
const ARRAY_METHODS: &[&str] = &[
    "map",
    "filter",
    "reduce",
    "findIndex",
    "find",
    "some",
    "every",
    "flatMap",
];

/// Flags syntax constructs that indicate computation rather than a direct
/// passthrough call.
#[derive(Debug, Clone)]
pub struct NoLogic {
    severity: Severity,
}

impl Default for NoLogic {
    fn default() -> Self {
        Self::new()
    }
}

impl NoLogic {
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

    fn check_function_declaration(ctx: &mut RuleContext<'_>, node: &Node<'_>) {
        // Export status is judged on the immediate parent only. A helper
        // nested one level deeper is not exported even if the enclosing
        // block is eventually returned from an exported function.
        if node
            .parent()
            .is_some_and(|p| p.kind() == "export_statement")
        {
            return;
        }

        let name = node
            .child_by_field_name("name")
            .map_or("anonymous", |n| ctx.text(&n));
        ctx.report(node, messages::HELPER_FUNCTION, &[("name", name)]);
    }

    fn check_call_expression(ctx: &mut RuleContext<'_>, node: &Node<'_>) {
        let Some(callee) = node.child_by_field_name("function") else {
            return;
        };
        if callee.kind() != "member_expression" {
            return;
        }
        let Some(property) = callee.child_by_field_name("property") else {
            return;
        };
        // Computed access (`obj["map"]`) parses as subscript_expression and
        // private names as private_property_identifier; neither is matched.
        if property.kind() != "property_identifier" {
            return;
        }

        let method = ctx.text(&property);
        if ARRAY_METHODS.contains(&method) {
            ctx.report(node, messages::ARRAY_METHOD, &[("method", method)]);
        }
    }
}

impl Rule for NoLogic {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids branching, loops, helper functions, and array transformations in FFI files"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn node_kinds(&self) -> &'static [NodeKind] {
        &[
            NodeKind::FunctionDeclaration,
            NodeKind::IfStatement,
            NodeKind::ForStatement,
            NodeKind::ForInStatement,
            NodeKind::WhileStatement,
            NodeKind::DoStatement,
            NodeKind::TernaryExpression,
            NodeKind::SwitchStatement,
            NodeKind::CallExpression,
        ]
    }

    fn check_node(&self, ctx: &mut RuleContext<'_>, node: &Node<'_>) {
        let Some(kind) = NodeKind::from_grammar(node.kind()) else {
            return;
        };

        match kind {
            NodeKind::FunctionDeclaration => Self::check_function_declaration(ctx, node),
            NodeKind::IfStatement => ctx.report(node, messages::IF_STATEMENT, &[]),
            NodeKind::TernaryExpression => ctx.report(node, messages::TERNARY, &[]),
            NodeKind::SwitchStatement => ctx.report(node, messages::SWITCH, &[]),
            NodeKind::CallExpression => Self::check_call_expression(ctx, node),
            kind if kind.is_loop() => ctx.report(node, messages::LOOP, &[]),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ffi_lint_core::{for_each_node, Diagnostic};
    use std::path::Path;
    use tree_sitter::Parser;

    fn check(source: &str) -> Vec<Diagnostic> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_javascript::LANGUAGE.into())
            .expect("failed to set javascript language");
        let tree = parser.parse(source, None).expect("failed to parse");

        let rule = NoLogic::new();
        let mut ctx = RuleContext::new(
            Path::new("ffi.js"),
            source.as_bytes(),
            &rule,
            rule.default_severity(),
        );
        for_each_node(tree.root_node(), |node| {
            if NodeKind::from_grammar(node.kind())
                .is_some_and(|k| rule.node_kinds().contains(&k))
            {
                rule.check_node(&mut ctx, &node);
            }
        });
        ctx.into_diagnostics()
    }

    fn message_ids(diagnostics: &[Diagnostic]) -> Vec<&str> {
        diagnostics.iter().map(|d| d.message_id.as_str()).collect()
    }

    #[test]
    fn flags_non_exported_function_with_name() {
        let diagnostics = check("function helper(x) { return lib.call(x); }");
        assert_eq!(message_ids(&diagnostics), vec!["helperFunction"]);
        assert_eq!(
            diagnostics[0].data.get("name").map(String::as_str),
            Some("helper")
        );
    }

    #[test]
    fn allows_exported_function() {
        assert!(check("export function wrap(x) { return lib.call(x); }").is_empty());
    }

    #[test]
    fn allows_default_exported_function() {
        assert!(check("export default function wrap(x) { return lib.call(x); }").is_empty());
    }

    #[test]
    fn anonymous_default_export_is_allowed() {
        assert!(check("export default function (x) { return lib.call(x); }").is_empty());
    }

    #[test]
    fn flags_function_nested_in_exported_function() {
        // Only the immediate parent decides export status.
        let diagnostics =
            check("export function wrap() { function inner(x) { return lib.call(x); } }");
        assert_eq!(message_ids(&diagnostics), vec!["helperFunction"]);
        assert_eq!(
            diagnostics[0].data.get("name").map(String::as_str),
            Some("inner")
        );
    }

    #[test]
    fn flags_generator_declaration() {
        let diagnostics = check("function* gen() { }");
        assert_eq!(message_ids(&diagnostics), vec!["helperFunction"]);
    }

    #[test]
    fn allows_arrow_function_stub() {
        assert!(check("export const f = (x) => () => lib.call(x);").is_empty());
    }

    #[test]
    fn flags_if_statement() {
        assert_eq!(message_ids(&check("if (x) { y(); }")), vec!["ifStatement"]);
    }

    #[test]
    fn flags_each_if_in_else_chain() {
        let diagnostics = check("if (a) { } else if (b) { } else { }");
        assert_eq!(message_ids(&diagnostics), vec!["ifStatement", "ifStatement"]);
    }

    #[test]
    fn flags_every_loop_form() {
        for source in [
            "for (let i = 0; i < 3; i++) { }",
            "for (const k in obj) { }",
            "for (const v of xs) { }",
            "while (x) { }",
            "do { } while (x);",
        ] {
            assert_eq!(message_ids(&check(source)), vec!["loop"], "source: {source}");
        }
    }

    #[test]
    fn flags_empty_branches_too() {
        assert_eq!(message_ids(&check("if (x) { }")), vec!["ifStatement"]);
    }

    #[test]
    fn flags_ternary() {
        assert_eq!(message_ids(&check("const y = x ? 1 : 2;")), vec!["ternary"]);
    }

    #[test]
    fn flags_switch() {
        assert_eq!(
            message_ids(&check("switch (x) { case 1: break; }")),
            vec!["switch"]
        );
    }

    #[test]
    fn flags_array_methods_by_name() {
        for method in [
            "map", "filter", "reduce", "findIndex", "find", "some", "every", "flatMap",
        ] {
            let diagnostics = check(&format!("xs.{method}(f);"));
            assert_eq!(
                message_ids(&diagnostics),
                vec!["arrayMethod"],
                "method: {method}"
            );
            assert_eq!(
                diagnostics[0].data.get("method").map(String::as_str),
                Some(method)
            );
        }
    }

    #[test]
    fn allows_other_member_calls() {
        assert!(check("lib.method(x);").is_empty());
        assert!(check("xs.forEach(f);").is_empty());
        assert!(check("xs.push(1);").is_empty());
    }

    #[test]
    fn allows_plain_calls_and_computed_access() {
        assert!(check("map(xs);").is_empty());
        assert!(check(r#"xs["map"](f);"#).is_empty());
    }

    #[test]
    fn helper_with_array_method_yields_both() {
        let diagnostics = check("function helper(x) { return x.map(y => y); }");
        let mut ids = message_ids(&diagnostics);
        ids.sort_unstable();
        assert_eq!(ids, vec!["arrayMethod", "helperFunction"]);
    }
}
