//! # ffi-lint-rules
//!
//! Built-in lint rules for ffi-lint.
//!
//! FFI files are expected to be thin stubs: one passthrough export per
//! binding, importing only external packages. These rules enforce that
//! policy syntactically.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | FFI001 | `no-logic` | Forbids branching, loops, helper functions, and array transformations in FFI files |
//! | FFI002 | `no-local-imports` | Forbids importing or requiring local project files from FFI files |
//!
//! ## Usage
//!
//! ```ignore
//! use ffi_lint_js::Engine;
//! use ffi_lint_rules::all_rules;
//!
//! let engine = Engine::builder()
//!     .rules(all_rules())
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod no_local_imports;
mod no_logic;
mod presets;

pub use no_local_imports::{is_local_import, NoLocalImports};
pub use no_logic::NoLogic;
pub use presets::{all_rules, rule_by_name};

/// Re-export core types for convenience.
pub use ffi_lint_core::{Rule, RuleBox, Severity};
