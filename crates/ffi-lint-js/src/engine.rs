//! Rule engine: single-pass dispatch of node callbacks over one file.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use ffi_lint_core::{for_each_node, Config, Diagnostic, NodeKind, RuleBox, RuleContext};

use crate::parser::{JsParser, ParseError};

/// Errors produced while checking a source text.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The file could not be parsed at all.
    #[error("parse error in {path}: {source}")]
    Parse {
        /// File the parser gave up on.
        path: PathBuf,
        /// Underlying parse error.
        source: ParseError,
    },
}

/// Builder for configuring an [`Engine`].
#[derive(Default)]
pub struct EngineBuilder {
    rules: Vec<RuleBox>,
    config: Config,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a boxed rule to the engine.
    #[must_use]
    pub fn rule(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules to the engine.
    #[must_use]
    pub fn rules(mut self, rules: Vec<RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration used for rule enablement and severity.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Builds the engine.
    #[must_use]
    pub fn build(self) -> Engine {
        Engine {
            parser: JsParser::new(),
            rules: self.rules,
            config: self.config,
        }
    }
}

/// Runs registered rules over individual JavaScript sources.
///
/// One engine can check any number of files; it keeps no state between
/// files. Every file gets a fresh traversal with fresh per-rule contexts,
/// so checks are independently reproducible.
pub struct Engine {
    parser: JsParser,
    rules: Vec<RuleBox>,
    config: Config,
}

impl Engine {
    /// Creates a new builder for configuring an engine.
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the engine's configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Checks one source text, returning diagnostics sorted by position.
    ///
    /// `file` is the path diagnostics are reported against; it is never
    /// used to decide what gets analyzed.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be parsed into a tree.
    pub fn check_source(&self, file: &Path, source: &str) -> Result<Vec<Diagnostic>, EngineError> {
        let tree = self
            .parser
            .parse(source)
            .map_err(|e| EngineError::Parse {
                path: file.to_path_buf(),
                source: e,
            })?;
        let src = source.as_bytes();

        // One detector set per file: a fresh context per enabled rule.
        let mut active: Vec<(&RuleBox, RuleContext<'_>)> = self
            .rules
            .iter()
            .filter(|rule| self.config.is_rule_enabled(rule.name()))
            .map(|rule| {
                let severity = self
                    .config
                    .rule_severity(rule.name())
                    .unwrap_or_else(|| rule.default_severity());
                (rule, RuleContext::new(file, src, rule.as_ref(), severity))
            })
            .collect();

        for_each_node(tree.root_node(), |node| {
            let Some(kind) = NodeKind::from_grammar(node.kind()) else {
                return;
            };
            for (rule, ctx) in &mut active {
                if rule.node_kinds().contains(&kind) {
                    rule.check_node(ctx, &node);
                }
            }
        });

        let mut diagnostics: Vec<Diagnostic> = active
            .into_iter()
            .flat_map(|(_, ctx)| ctx.into_diagnostics())
            .collect();
        diagnostics.sort_by(|a, b| {
            a.location
                .line
                .cmp(&b.location.line)
                .then(a.location.column.cmp(&b.location.column))
        });

        debug!(
            "Checked {}: {} diagnostic(s)",
            file.display(),
            diagnostics.len()
        );

        Ok(diagnostics)
    }
}
