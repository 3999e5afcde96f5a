//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::application::HandlerOptions;
use crate::error::GladiusResult;

use super::loader::{self, ConfigWarning};

/// Naming of materialized files
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,

    #[serde(default)]
    pub suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            suffix: String::new(),
        }
    }
}

fn default_prefix() -> String {
    crate::application::handler::DEFAULT_PREFIX.to_string()
}

/// What `gladius watch` observes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WatchConfig {
    /// Directory to watch (defaults to the working directory)
    #[serde(default)]
    pub source: Option<PathBuf>,

    #[serde(default = "default_true")]
    pub recursive: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            source: None,
            recursive: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    /// Project root holding the role directories (defaults to the working directory)
    #[serde(default)]
    pub root: Option<PathBuf>,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub watch: WatchConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> GladiusResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> GladiusResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Root directory, with a relative value resolved against `cwd`
    pub fn root_directory(&self, cwd: &Path) -> PathBuf {
        match &self.root {
            Some(root) if root.is_absolute() => root.clone(),
            Some(root) => cwd.join(root),
            None => cwd.to_path_buf(),
        }
    }

    /// Watched directory, with a relative value resolved against `cwd`
    pub fn watch_source(&self, cwd: &Path) -> PathBuf {
        match &self.watch.source {
            Some(source) if source.is_absolute() => source.clone(),
            Some(source) => cwd.join(source),
            None => cwd.to_path_buf(),
        }
    }

    /// Handler options derived from this configuration
    pub fn handler_options(&self, cwd: &Path) -> HandlerOptions {
        HandlerOptions::new(self.root_directory(cwd))
            .with_prefix(self.output.prefix.clone())
            .with_suffix(self.output.suffix.clone())
    }
}
