//! Handler Options
//!
//! Configuration for a `WatchHandler`. Fixed for the lifetime of the handler.

use std::path::PathBuf;

/// Default filename prefix for allocated output files
pub const DEFAULT_PREFIX: &str = "tmp";

/// Options for the watch handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerOptions {
    /// Project root; role directories are created directly beneath it
    pub root_directory: PathBuf,
    /// Filename prefix for allocated files
    pub prefix: String,
    /// Filename suffix for files materialized by `on_created`
    pub suffix: String,
}

impl HandlerOptions {
    pub fn new(root_directory: impl Into<PathBuf>) -> Self {
        Self {
            root_directory: root_directory.into(),
            prefix: DEFAULT_PREFIX.to_string(),
            suffix: String::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}
