//! # ffi-lint-js
//!
//! Tree-sitter powered JavaScript host for ffi-lint rules.
//!
//! This crate is the "host framework" side of the rule contracts defined in
//! `ffi-lint-core`: it parses JavaScript source with tree-sitter, walks each
//! file's syntax tree exactly once in preorder, and dispatches node callbacks
//! to the rules that registered interest in each node kind. It adds:
//!
//! - [`JsParser`] for tree-sitter-javascript parsing
//! - [`Engine`] for running rules over a single source text
//! - [`Analyzer`] for discovering and checking files under a root directory

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod engine;
mod parser;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use engine::{Engine, EngineBuilder, EngineError};
pub use parser::{JsParser, ParseError, JS_EXTENSIONS};

