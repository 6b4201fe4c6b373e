//! File discovery and batch analysis.
//!
//! The analyzer owns every path-related decision: which files under the root
//! are JavaScript, which are excluded, and how paths are reported. Rules
//! never see file paths beyond the location on their diagnostics.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use ffi_lint_core::{Config, ConfigError, LintResult, RuleBox};

use crate::engine::{Engine, EngineError};
use crate::parser::JS_EXTENSIONS;

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error walking the directory tree.
    #[error("walk error: {0}")]
    Walk(#[from] ignore::Error),

    /// A file failed to parse and `fail_on_parse_error` is set.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
    fail_on_parse_error: bool,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a boxed rule.
    #[must_use]
    pub fn rule(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules.
    #[must_use]
    pub fn rules(mut self, rules: Vec<RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Adds an exclude pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether to fail on parse errors (default: false).
    #[must_use]
    pub fn fail_on_parse_error(mut self, fail: bool) -> Self {
        self.fail_on_parse_error = fail;
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();

        let root = self
            .root
            .unwrap_or_else(|| config.analyzer.root.clone());
        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let mut exclude_patterns = self.exclude_patterns;
        exclude_patterns.extend(config.analyzer.exclude.clone());
        let include_patterns = config.analyzer.include.clone();

        let respect_gitignore = config.analyzer.respect_gitignore;
        let fail_on_parse_error = self.fail_on_parse_error;
        let engine = Engine::builder().rules(self.rules).config(config).build();

        Ok(Analyzer {
            root,
            engine,
            include_patterns,
            exclude_patterns,
            respect_gitignore,
            fail_on_parse_error,
        })
    }
}

/// Discovers JavaScript files under a root and runs the engine over them.
pub struct Analyzer {
    root: PathBuf,
    engine: Engine,
    include_patterns: Vec<String>,
    exclude_patterns: Vec<String>,
    respect_gitignore: bool,
    fail_on_parse_error: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.engine.rule_count()
    }

    /// Analyzes all discovered files and returns the aggregated result.
    ///
    /// # Errors
    ///
    /// Returns an error if discovery or file reading fails, or if a file
    /// fails to parse while `fail_on_parse_error` is set.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {:?}", self.root);

        let files = self.discover_files()?;
        info!("Found {} files to analyze", files.len());

        let mut result = LintResult::new();

        for file_path in &files {
            let source = std::fs::read_to_string(file_path)?;
            let relative = file_path
                .strip_prefix(&self.root)
                .unwrap_or(file_path)
                .to_path_buf();

            match self.engine.check_source(&relative, &source) {
                Ok(diagnostics) => {
                    result.diagnostics.extend(diagnostics);
                    result.files_checked += 1;
                }
                Err(e @ EngineError::Parse { .. }) => {
                    warn!("{e}");
                    if self.fail_on_parse_error {
                        return Err(e.into());
                    }
                }
            }
        }

        result.sort();

        info!(
            "Analysis complete: {} diagnostic(s) in {} file(s)",
            result.diagnostics.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Discovers all JavaScript source files under the root.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        let mut builder = ignore::WalkBuilder::new(&self.root);
        builder.hidden(false).git_ignore(self.respect_gitignore);

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = entry?;
            let path = entry.path();

            if !path.is_file() || !is_js_file(path) {
                continue;
            }

            if !self.matches_include(path) {
                debug!("Not included: {}", path.display());
                continue;
            }

            if self.should_exclude(path) {
                debug!("Excluding: {}", path.display());
                continue;
            }

            files.push(path.to_path_buf());
        }

        files.sort();
        Ok(files)
    }

    /// Checks if a path matches the include patterns. An empty pattern list
    /// includes every JavaScript file.
    fn matches_include(&self, path: &Path) -> bool {
        if self.include_patterns.is_empty() {
            return true;
        }
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        let rel_str = rel.to_string_lossy();

        self.include_patterns.iter().any(|pattern| {
            let clean = pattern.replace("**/", "").replace("/**", "");
            !clean.is_empty() && rel_str.contains(&clean)
        })
    }

    /// Checks if a path matches any exclude pattern.
    fn should_exclude(&self, path: &Path) -> bool {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        let rel_str = rel.to_string_lossy();

        self.exclude_patterns.iter().any(|pattern| {
            let clean = pattern.replace("**/", "").replace("/**", "");
            !clean.is_empty() && rel_str.contains(&clean)
        })
    }
}

/// Checks if a path has a JavaScript extension.
fn is_js_file(path: &Path) -> bool {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();
    JS_EXTENSIONS.contains(&ext.as_str())
}
