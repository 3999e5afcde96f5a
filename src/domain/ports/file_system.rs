//! FileSystem port - abstraction over file I/O operations
//!
//! The handler performs every disk operation through this trait so tests can
//! observe directory creation and substitute failures.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Classify an I/O error that happened at `path`
    pub fn at(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl From<io::Error> for FsError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(PathBuf::new()),
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied(PathBuf::new()),
            _ => FsError::Io(err),
        }
    }
}

impl From<FsError> for io::Error {
    fn from(err: FsError) -> Self {
        match err {
            FsError::NotFound(path) => io::Error::new(
                io::ErrorKind::NotFound,
                format!("not found: {}", path.display()),
            ),
            FsError::PermissionDenied(path) => io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", path.display()),
            ),
            FsError::Io(err) => err,
            FsError::Other(msg) => io::Error::other(msg),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {}

/// A freshly allocated, empty, persistent output file
#[derive(Debug)]
pub struct OutputFile {
    path: PathBuf,
    file: File,
}

impl OutputFile {
    pub fn new(path: PathBuf, file: File) -> Self {
        Self { path, file }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the full content and wait until it reaches the disk
    pub fn write_durable(&mut self, content: &[u8]) -> io::Result<()> {
        self.file.write_all(content)?;
        self.file.flush()?;
        self.file.sync_all()
    }

    /// Close the handle, keeping the file on disk
    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - test doubles that record or fail selected calls
pub trait FileSystem {
    /// Read raw file content
    fn read(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Read file content as string
    fn read_to_string(&self, path: &Path) -> FsResult<String>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Create a new file in `dir` whose name no other call or existing entry uses
    fn create_unique(&self, dir: &Path, prefix: &str, suffix: &str) -> FsResult<OutputFile>;

    /// Delete a file
    fn remove_file(&self, path: &Path) -> FsResult<()>;
}
