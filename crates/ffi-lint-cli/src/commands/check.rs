//! Check command implementation.

use anyhow::{Context, Result};
use ffi_lint_core::{RuleBox, Severity};
use ffi_lint_js::Analyzer;
use ffi_lint_rules::{all_rules, rule_by_name};
use std::path::Path;

use super::output;
use crate::{config_resolver, OutputFormat};

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    fail_on_parse_error: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = config_resolver::load(path, config_path)?;
    let fail_on = config.fail_on.unwrap_or(Severity::Error);

    let mut builder = Analyzer::builder()
        .root(path)
        .config(config)
        .fail_on_parse_error(fail_on_parse_error);

    for pattern in exclude {
        builder = builder.exclude(pattern);
    }

    let rules_to_add = if let Some(filter) = rules_filter {
        let names: Vec<&str> = filter.split(',').map(str::trim).collect();
        filter_rules(&names)
    } else {
        all_rules()
    };
    builder = builder.rules(rules_to_add);

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let result = analyzer.analyze().context("Analysis failed")?;

    output::print(&result, format)?;

    if result.has_diagnostics_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

fn filter_rules(names: &[&str]) -> Vec<RuleBox> {
    let mut rules = Vec::new();
    for name in names {
        match rule_by_name(name) {
            Some(rule) => rules.push(rule),
            None => tracing::warn!("Unknown rule: {}", name),
        }
    }
    rules
}
