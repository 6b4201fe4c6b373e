//! Locates and loads the lint configuration.
//!
//! Lookup order: an explicit `--config` path, then `ffi-lint.toml` or
//! `.ffi-lint.toml` in the checked directory, then `config.toml` in the
//! global directory (`~/.ffi-lint`, overridable through
//! `FFI_LINT_CONFIG_DIR`). When nothing is found the built-in defaults
//! apply.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use ffi_lint_core::Config;

/// Project-level config file names, checked in order.
const PROJECT_FILES: &[&str] = &["ffi-lint.toml", ".ffi-lint.toml"];

/// Loads the effective configuration for a check of `project_dir`.
///
/// # Errors
///
/// Fails when a located file cannot be read or parsed. A missing explicit
/// path is an error; absent project or global files are not.
pub fn load(project_dir: &Path, explicit: Option<&Path>) -> Result<Config> {
    load_from(project_dir, explicit, global_dir())
}

// The global directory is a parameter so tests never touch the real home.
fn load_from(
    project_dir: &Path,
    explicit: Option<&Path>,
    global: Option<PathBuf>,
) -> Result<Config> {
    if let Some(path) = explicit {
        return load_file(path);
    }

    for name in PROJECT_FILES {
        let candidate = project_dir.join(name);
        if candidate.exists() {
            tracing::debug!("Using project config: {}", candidate.display());
            return load_file(&candidate);
        }
    }

    if let Some(candidate) = global.map(|dir| dir.join("config.toml")) {
        if candidate.exists() {
            tracing::info!("Using global config: {}", candidate.display());
            return load_file(&candidate);
        }
    }

    Ok(Config::default())
}

fn load_file(path: &Path) -> Result<Config> {
    Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
}

/// Global config directory: `$FFI_LINT_CONFIG_DIR` over `~/.ffi-lint`.
fn global_dir() -> Option<PathBuf> {
    std::env::var_os("FFI_LINT_CONFIG_DIR")
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|home| home.join(".ffi-lint")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ffi_lint_core::Severity;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_path_wins_over_project_file() {
        let tmp = TempDir::new().unwrap();
        let explicit = tmp.path().join("custom.toml");
        fs::write(&explicit, "fail_on = \"info\"\n").unwrap();
        fs::write(tmp.path().join("ffi-lint.toml"), "fail_on = \"warning\"\n").unwrap();

        let config = load_from(tmp.path(), Some(&explicit), None).unwrap();
        assert_eq!(config.fail_on, Some(Severity::Info));
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nonexistent.toml");
        assert!(load_from(tmp.path(), Some(&missing), None).is_err());
    }

    #[test]
    fn project_file_is_loaded() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("ffi-lint.toml"),
            "[rules.no-logic]\nseverity = \"warning\"\n",
        )
        .unwrap();

        let config = load_from(tmp.path(), None, None).unwrap();
        assert_eq!(config.rule_severity("no-logic"), Some(Severity::Warning));
    }

    #[test]
    fn plain_name_preferred_over_dot_prefix() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("ffi-lint.toml"),
            "[rules.no-logic]\nenabled = false\n",
        )
        .unwrap();
        fs::write(
            tmp.path().join(".ffi-lint.toml"),
            "[rules.no-local-imports]\nenabled = false\n",
        )
        .unwrap();

        let config = load_from(tmp.path(), None, None).unwrap();
        assert!(!config.is_rule_enabled("no-logic"));
        assert!(config.is_rule_enabled("no-local-imports"));
    }

    #[test]
    fn global_file_applies_when_project_has_none() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(global.path().join("config.toml"), "fail_on = \"info\"\n").unwrap();

        let config = load_from(
            project.path(),
            None,
            Some(global.path().to_path_buf()),
        )
        .unwrap();
        assert_eq!(config.fail_on, Some(Severity::Info));
    }

    #[test]
    fn project_file_shadows_global() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(project.path().join("ffi-lint.toml"), "fail_on = \"warning\"\n").unwrap();
        fs::write(global.path().join("config.toml"), "fail_on = \"info\"\n").unwrap();

        let config = load_from(
            project.path(),
            None,
            Some(global.path().to_path_buf()),
        )
        .unwrap();
        assert_eq!(config.fail_on, Some(Severity::Warning));
    }

    #[test]
    fn defaults_when_nothing_found() {
        let project = TempDir::new().unwrap();
        let config = load_from(project.path(), None, None).unwrap();
        assert_eq!(config.fail_on, None);
        assert!(config.is_rule_enabled("no-logic"));
        assert!(config.is_rule_enabled("no-local-imports"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("ffi-lint.toml"), "rules = nonsense").unwrap();
        assert!(load_from(tmp.path(), None, None).is_err());
    }
}
