//! Rule set construction helpers.

use ffi_lint_core::RuleBox;

use crate::no_local_imports::NoLocalImports;
use crate::no_logic::NoLogic;

/// Returns every built-in rule.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![Box::new(NoLogic::new()), Box::new(NoLocalImports::new())]
}

/// Looks up a single rule by its name or code.
#[must_use]
pub fn rule_by_name(name: &str) -> Option<RuleBox> {
    match name {
        crate::no_logic::NAME | crate::no_logic::CODE => Some(Box::new(NoLogic::new())),
        crate::no_local_imports::NAME | crate::no_local_imports::CODE => {
            Some(Box::new(NoLocalImports::new()))
        }
        _ => None,
    }
}
