//! Rule trait for defining per-node lint rules.

use crate::context::RuleContext;
use crate::node::NodeKind;
use crate::types::Severity;

/// A stateless per-node lint rule.
///
/// A rule declares the [`NodeKind`]s it is interested in; the host traversal
/// invokes [`Rule::check_node`] once per matching node, in tree order, during
/// a single pass over one file's syntax tree. Rules must be pure functions of
/// the node they are given (plus locally inspectable ancestor context such as
/// the node's immediate parent) and report findings through the context.
///
/// # Example
///
/// ```ignore
/// use ffi_lint_core::{NodeKind, Rule, RuleContext};
///
/// pub struct NoDebugger;
///
/// impl Rule for NoDebugger {
///     fn name(&self) -> &'static str { "no-debugger" }
///     fn code(&self) -> &'static str { "FFI099" }
///     fn node_kinds(&self) -> &'static [NodeKind] { &[NodeKind::CallExpression] }
///
///     fn check_node(&self, ctx: &mut RuleContext<'_>, node: &tree_sitter::Node<'_>) {
///         // inspect the node, then ctx.report(..)
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "no-logic").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "FFI001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for diagnostics from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Returns the node kinds this rule wants callbacks for.
    fn node_kinds(&self) -> &'static [NodeKind];

    /// Inspects a single node and reports any violation through `ctx`.
    ///
    /// Invoked once per node of a registered kind. Must never panic on
    /// well-formed trees; a node that cannot be classified is silently
    /// allowed.
    fn check_node(&self, ctx: &mut RuleContext<'_>, node: &tree_sitter::Node<'_>);
}

/// Type alias for boxed rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn node_kinds(&self) -> &'static [NodeKind] {
            &[NodeKind::IfStatement]
        }
        fn check_node(&self, ctx: &mut RuleContext<'_>, node: &tree_sitter::Node<'_>) {
            ctx.report(node, messages::IF_STATEMENT, &[]);
        }
    }

    #[test]
    fn rule_trait_defaults() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Error);
        assert_eq!(rule.description(), "");
        assert_eq!(rule.node_kinds(), &[NodeKind::IfStatement]);
    }
}
