//! List-rules command implementation.

use ffi_lint_rules::all_rules;

/// Prints every available rule with its code and default severity.
pub fn run() {
    println!("Available rules:\n");
    for rule in all_rules() {
        println!(
            "  {} {} [{}]",
            rule.code(),
            rule.name(),
            rule.default_severity()
        );
        if !rule.description().is_empty() {
            println!("      {}", rule.description());
        }
    }
    println!("\nEnable or tune rules in ffi-lint.toml under [rules.<name>].");
}
