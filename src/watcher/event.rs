//! Watch event types and options

use std::path::{Path, PathBuf};

use crate::application::Outcome;
use crate::error::GladiusError;

/// Receive timeout of the watch loop, bounds shutdown latency
pub const POLL_MS: u64 = 50;

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Directory to watch
    pub source: PathBuf,
    /// Watch subdirectories too
    pub recursive: bool,
}

impl WatchOptions {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            recursive: true,
        }
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    WatchStarted {
        source: String,
        out: String,
    },
    Materialized {
        source: String,
        output: String,
        digest: String,
    },
    Duplicate {
        source: String,
        digest: String,
    },
    SkippedDirectory {
        path: String,
    },
    Error {
        #[serde(skip_serializing_if = "Option::is_none")]
        path: Option<String>,
        message: String,
    },
    Shutdown,
}

impl WatchEvent {
    /// Report for a handled notification
    pub fn from_outcome(src: &Path, outcome: &Outcome) -> Self {
        match outcome {
            Outcome::SkippedDirectory => WatchEvent::SkippedDirectory {
                path: src.display().to_string(),
            },
            Outcome::Duplicate { digest } => WatchEvent::Duplicate {
                source: src.display().to_string(),
                digest: digest.to_string(),
            },
            Outcome::Materialized(file) => WatchEvent::Materialized {
                source: src.display().to_string(),
                output: file.path().display().to_string(),
                digest: file.digest().to_string(),
            },
        }
    }

    /// Report for a failed notification
    pub fn from_error(src: Option<&Path>, err: &GladiusError) -> Self {
        WatchEvent::Error {
            path: src
                .or_else(|| err.path().map(PathBuf::as_path))
                .map(|p| p.display().to_string()),
            message: err.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, WatchEvent::Error { .. })
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
