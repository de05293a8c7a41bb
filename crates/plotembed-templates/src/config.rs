//! Registry configuration and base directory resolution.
//!
//! The base directory is resolved in this order:
//! 1. `base-dir` set explicitly in configuration
//! 2. the `PLOTEMBED_BASE_DIR` environment variable
//! 3. the directory containing the running executable
//!
//! Templates are then looked up in `<base>/<templates-subdir>`.
//!
//! Paths are taken as given: the environment variable gets no `~` expansion,
//! and a relative base directory resolves against the current working
//! directory. Callers that read paths from a config file anchor them first
//! (`plotembed-ctl` resolves them against the file's own directory).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{RegistryError, Result};
use crate::names::TemplateName;

/// Environment variable consulted when no base directory is configured.
pub const BASE_DIR_ENV: &str = "PLOTEMBED_BASE_DIR";

/// Default name of the template directory under the base directory.
pub const DEFAULT_TEMPLATES_SUBDIR: &str = "_templates";

fn default_templates_subdir() -> String {
    DEFAULT_TEMPLATES_SUBDIR.to_string()
}

fn default_templates() -> Vec<TemplateName> {
    TemplateName::ALL.to_vec()
}

/// How a registry finds and prepares its templates.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RegistryConfig {
    /// Directory containing the templates subdirectory.
    pub base_dir: Option<PathBuf>,

    /// Subdirectory of `base_dir` holding the template files. Default: `_templates`.
    #[serde(default = "default_templates_subdir")]
    pub templates_subdir: String,

    /// HTML-escape `.html`/`.htm`/`.xml` templates. Default: off.
    #[serde(default)]
    pub autoescape: bool,

    /// Templates that must load. Default: all of them.
    #[serde(default = "default_templates")]
    pub templates: Vec<TemplateName>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            templates_subdir: default_templates_subdir(),
            autoescape: false,
            templates: default_templates(),
        }
    }
}

/// Where the base directory came from, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseDirSource {
    Config,
    Environment,
    Executable,
}

impl RegistryConfig {
    /// Config with an explicit base directory and every template required.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
            ..Self::default()
        }
    }

    /// Restrict the required templates to `names`.
    pub fn only(mut self, names: &[TemplateName]) -> Self {
        self.templates = names.to_vec();
        self
    }

    pub fn autoescape(mut self, enabled: bool) -> Self {
        self.autoescape = enabled;
        self
    }

    /// Resolve the base directory following the documented precedence.
    pub fn resolve_base_dir(&self) -> Result<(PathBuf, BaseDirSource)> {
        if let Some(dir) = &self.base_dir {
            return Ok((dir.clone(), BaseDirSource::Config));
        }

        if let Some(dir) = std::env::var_os(BASE_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok((PathBuf::from(dir), BaseDirSource::Environment));
        }

        let exe = std::env::current_exe().map_err(|e| {
            RegistryError::PathResolution(format!("cannot locate running executable: {e}"))
        })?;
        exe.parent()
            .map(|dir| (dir.to_path_buf(), BaseDirSource::Executable))
            .ok_or_else(|| {
                RegistryError::PathResolution(format!(
                    "executable {} has no parent directory",
                    exe.display()
                ))
            })
    }

    /// Full path of the templates directory under `base_dir`.
    pub fn templates_dir_under(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.templates_subdir)
    }
}
