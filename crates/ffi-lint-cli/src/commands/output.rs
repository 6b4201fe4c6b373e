//! Output rendering for lint results.

use std::fmt::Write;

use anyhow::Result;
use ffi_lint_core::{Diagnostic, LintResult, Severity};

use crate::OutputFormat;

/// Prints a lint result in the requested format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => print_json(result)?,
        OutputFormat::Compact => print_compact(result),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    for diagnostic in &result.diagnostics {
        println!("{}", format_diagnostic(diagnostic));
    }

    let (errors, warnings, infos) = result.count_by_severity();
    let color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };
    println!(
        "{color}{} file(s) checked: {errors} error(s), {warnings} warning(s), {infos} info(s)\x1b[0m",
        result.files_checked
    );
}

/// Renders one diagnostic: a location line with the severity, rule code,
/// and message id, then the message, then any placeholder data.
fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    let mut out = format!(
        "{}:{}:{} {} {} {}\n  {}\n",
        diagnostic.location.file.display(),
        diagnostic.location.line,
        diagnostic.location.column,
        severity_label(diagnostic.severity),
        diagnostic.code,
        diagnostic.message_id,
        diagnostic.message,
    );
    for (key, value) in &diagnostic.data {
        let _ = writeln!(out, "    {key}: {value}");
    }
    out
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "\x1b[31merror\x1b[0m",
        Severity::Warning => "\x1b[33mwarning\x1b[0m",
        Severity::Info => "\x1b[34minfo\x1b[0m",
    }
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for diagnostic in &result.diagnostics {
        println!("{diagnostic}");
    }
}
