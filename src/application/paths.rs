//! Role directory initialization

use std::io;
use std::path::Path;

use tracing::info;

use crate::domain::ports::FileSystem;
use crate::error::{GladiusError, GladiusResult};

/// Guarantees that a directory exists, creating it (and parents) if needed.
///
/// Idempotent: an existing directory is left untouched and no creation call is
/// issued for it.
pub struct PathInitializer<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
}

impl<'a, F: FileSystem + ?Sized> PathInitializer<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// Ensure `path` exists as a directory.
    ///
    /// A non-directory already sitting at `path` is an initialization error.
    pub fn ensure(&self, path: &Path) -> GladiusResult<()> {
        if self.fs.exists(path) {
            if self.fs.is_dir(path) {
                return Ok(());
            }
            return Err(GladiusError::Init {
                path: path.to_path_buf(),
                source: io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    "path exists and is not a directory",
                ),
            });
        }

        self.fs
            .create_dir_all(path)
            .map_err(|e| GladiusError::Init {
                path: path.to_path_buf(),
                source: e.into(),
            })?;
        info!(path = %path.display(), "created directory");
        Ok(())
    }
}
