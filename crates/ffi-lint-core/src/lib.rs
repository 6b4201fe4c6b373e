//! # ffi-lint-core
//!
//! Core framework for linting JavaScript FFI stub files.
//!
//! FFI files wrap calls into an external library for consumption by a
//! statically-typed host language. They are expected to be thin stubs: a
//! passthrough export per binding, no branching, no local imports. This crate
//! provides the foundational pieces for rules that enforce that policy:
//!
//! - [`NodeKind`] maps tree-sitter grammar kinds to the syntax constructs
//!   rules can register interest in
//! - [`Rule`] trait for per-node callbacks driven by the host traversal
//! - [`RuleContext`] for reporting [`Diagnostic`]s against a message catalog
//! - [`Config`] for enabling rules and overriding severities
//!
//! ## Example
//!
//! ```ignore
//! use ffi_lint_core::{NodeKind, Rule, RuleContext, Severity};
//!
//! struct NoSwitch;
//!
//! impl Rule for NoSwitch {
//!     fn name(&self) -> &'static str { "no-switch" }
//!     fn code(&self) -> &'static str { "FFI900" }
//!     fn node_kinds(&self) -> &'static [NodeKind] { &[NodeKind::SwitchStatement] }
//!
//!     fn check_node(&self, ctx: &mut RuleContext<'_>, node: &tree_sitter::Node<'_>) {
//!         ctx.report(node, "switch", &[]);
//!     }
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod context;
mod node;
mod rule;
mod types;

/// Fixed message-template catalog shared by all rules.
pub mod messages;

pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::RuleContext;
pub use node::{for_each_node, node_text, string_literal_value, NodeKind};
pub use rule::{Rule, RuleBox};
pub use types::{Diagnostic, DiagnosticReport, LintResult, Location, Severity};
