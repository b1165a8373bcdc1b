//! Configuration for goreplace.
//!
//! Settings come from three places, highest precedence first:
//! 1. Command line / environment (`--gopath`, `GOPATH`)
//! 2. The user config file (`<config dir>/goreplace/config.toml`)
//! 3. Built-in defaults (`$HOME/go`, a 256 character input ceiling)
//!
//! The resolved values are passed explicitly to the resolver and to input
//! validation; nothing here is read from global state after startup.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default ceiling for operator-supplied input, in bytes.
pub const DEFAULT_MAX_INPUT_LEN: usize = 256;

/// goreplace configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Root under which `src/<module>` checkouts are looked up.
    /// May hold a path list like `GOPATH`; only the first entry is used.
    pub gopath: Option<PathBuf>,

    /// Maximum length of the partial name and of a selection answer.
    pub max_input_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            gopath: None,
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Override the root with a command line or environment value.
    pub fn with_gopath(mut self, gopath: Option<PathBuf>) -> Self {
        if let Some(gopath) = gopath.filter(|p| !p.as_os_str().is_empty()) {
            self.gopath = Some(gopath);
        }
        self
    }

    /// The directory whose `src/` holds local module checkouts.
    ///
    /// Falls back to Go's default of `$HOME/go`, and finally to the current
    /// directory when no home directory can be determined.
    pub fn gopath_root(&self) -> PathBuf {
        if let Some(first) = self
            .gopath
            .as_ref()
            .and_then(|list| std::env::split_paths(list).find(|p| !p.as_os_str().is_empty()))
        {
            return first;
        }

        directories::BaseDirs::new()
            .map(|b| b.home_dir().join("go"))
            .unwrap_or_default()
    }
}

/// Get the user config file path (`<config dir>/goreplace/config.toml`).
pub fn user_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "goreplace")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load the user config file, or defaults when there is none.
pub fn load_config() -> Config {
    match user_config_path() {
        Some(path) => Config::load_or_default(&path),
        None => Config::default(),
    }
}
