//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const CONFIG_FILE: &str = "ffi-lint.toml";

const TEMPLATE: &str = r#"# ffi-lint configuration
#
# Severity threshold for a failing exit code: "info", "warning", or "error".
fail_on = "error"

[analyzer]
# Root directory to analyze.
root = "."
# Glob patterns excluded from discovery.
exclude = ["**/node_modules/**", "**/dist/**", "**/build/**"]

# Rules are enabled by default. Disable or change severity per rule:
#
# [rules.no-logic]
# severity = "warning"
#
# [rules.no-local-imports]
# enabled = false
"#;

/// Runs the init command, writing a starter config file.
pub fn run(force: bool) -> Result<()> {
    let path = Path::new(CONFIG_FILE);

    if path.exists() && !force {
        bail!("{CONFIG_FILE} already exists (use --force to overwrite)");
    }

    std::fs::write(path, TEMPLATE).with_context(|| format!("Failed to write {CONFIG_FILE}"))?;
    println!("Created {CONFIG_FILE}");
    Ok(())
}
