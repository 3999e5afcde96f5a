//! Error types for Gladius
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Gladius operations
pub type GladiusResult<T> = Result<T, GladiusError>;

/// Main error type for Gladius operations
#[derive(Error, Debug)]
pub enum GladiusError {
    /// A role directory could not be created
    #[error("failed to initialize directory {path}: {source}")]
    Init {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A source file could not be read (vanished, permission denied, ...)
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No unique output file could be created in a role directory
    #[error("failed to allocate output file in {dir}: {source}")]
    Allocate {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing content into an allocated output file failed
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// The filesystem notification backend failed
    #[error("watcher error: {0}")]
    Watch(#[from] notify::Error),
}

impl GladiusError {
    /// Path the error is about, when there is one
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            GladiusError::Init { path, .. }
            | GladiusError::Read { path, .. }
            | GladiusError::Write { path, .. } => Some(path),
            GladiusError::Allocate { dir, .. } => Some(dir),
            GladiusError::Config { file, .. } => Some(file),
            GladiusError::Watch(_) => None,
        }
    }
}
