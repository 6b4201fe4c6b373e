//! Reporting context handed to rules during traversal.

use std::collections::BTreeMap;
use std::path::Path;

use crate::messages;
use crate::node::node_text;
use crate::rule::Rule;
use crate::types::{Diagnostic, Location, Severity};

/// Per-file, per-rule reporting context.
///
/// The host creates one context per rule for each file it traverses, hands it
/// to every callback of that rule, and collects the accumulated diagnostics
/// afterwards. Rules signal violations through [`RuleContext::report`]; the
/// context resolves the message id against the catalog, fills placeholders
/// from the data mapping, and anchors the diagnostic at the node's location.
#[derive(Debug)]
pub struct RuleContext<'a> {
    file: &'a Path,
    source: &'a [u8],
    rule_code: &'static str,
    rule_name: &'static str,
    severity: Severity,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> RuleContext<'a> {
    /// Creates a context for one rule over one file.
    ///
    /// `severity` is the effective severity after any configuration override.
    #[must_use]
    pub fn new(file: &'a Path, source: &'a [u8], rule: &dyn Rule, severity: Severity) -> Self {
        Self {
            file,
            source,
            rule_code: rule.code(),
            rule_name: rule.name(),
            severity,
            diagnostics: Vec::new(),
        }
    }

    /// Returns the raw source bytes of the file under analysis.
    #[must_use]
    pub fn source(&self) -> &'a [u8] {
        self.source
    }

    /// Returns the source text of a node.
    #[must_use]
    pub fn text(&self, node: &tree_sitter::Node<'_>) -> &'a str {
        node_text(node, self.source)
    }

    /// Reports a violation at `node`.
    ///
    /// `data` maps placeholder names to their values for message rendering
    /// and is carried on the diagnostic for consumers that re-render.
    pub fn report(&mut self, node: &tree_sitter::Node<'_>, message_id: &str, data: &[(&str, &str)]) {
        let message = messages::render(message_id, data);
        let location = Location::from_node(self.file.to_path_buf(), node);
        let data: BTreeMap<String, String> = data
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();

        self.diagnostics.push(
            Diagnostic::new(
                self.rule_code,
                self.rule_name,
                self.severity,
                location,
                message_id,
                message,
            )
            .with_data(data),
        );
    }

    /// Consumes the context, yielding the collected diagnostics.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
