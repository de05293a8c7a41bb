//! Config file discovery and loading for `.plotembed.toml`.
//!
//! Checks two locations in precedence order:
//! 1. `./.plotembed.toml` (project-local)
//! 2. `~/.config/plotembed.toml` (user-global)
//!
//! The file holds a [`RegistryConfig`] at top level.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use plotembed_templates::RegistryConfig;

const CONFIG_FILENAME: &str = ".plotembed.toml";
const GLOBAL_CONFIG_DIR: &str = ".config";
const GLOBAL_CONFIG_FILENAME: &str = "plotembed.toml";

/// Load config from the first discovered location, or return defaults.
///
/// A discovered file that cannot be read or parsed is logged and ignored.
pub(crate) fn load_cli_config() -> RegistryConfig {
    if let Some(path) = find_config_file() {
        match load_from_file(&path) {
            Ok(config) => {
                tracing::debug!(?path, "Loaded CLI config");
                return config;
            }
            Err(e) => {
                tracing::warn!(?path, error = %format!("{e:#}"), "Failed to load CLI config, using defaults");
            }
        }
    }
    RegistryConfig::default()
}

/// Load config from a path given on the command line. Failures are errors.
///
/// A relative `base-dir` in the file is taken relative to the file itself.
pub(crate) fn load_from_file(path: &Path) -> anyhow::Result<RegistryConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut config: RegistryConfig =
        toml::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))?;
    config.base_dir = config
        .base_dir
        .map(|dir| relative_to_file(path, expand_path(&dir)));
    Ok(config)
}

fn relative_to_file(file: &Path, dir: PathBuf) -> PathBuf {
    if dir.is_absolute() {
        return dir;
    }
    match file.parent() {
        Some(parent) => parent.join(dir),
        None => dir,
    }
}

/// Search for a config file in precedence order.
fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILENAME);
    if local.is_file() {
        return Some(local);
    }

    if let Some(home) = home_dir() {
        let global = home.join(GLOBAL_CONFIG_DIR).join(GLOBAL_CONFIG_FILENAME);
        if global.is_file() {
            return Some(global);
        }
    }

    None
}

/// Expand a leading `~/` to the home directory.
pub(crate) fn expand_path(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}
