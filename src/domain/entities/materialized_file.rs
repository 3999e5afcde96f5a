//! MaterializedFile entity - a staged copy of an observed source file
//!
//! Created on a cache miss. Never deleted by Gladius; ownership passes to
//! whatever downstream process reads the role directory.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ContentHash, Role};

/// A file written into a role directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializedFile {
    /// Where the copy lives (inside the role directory)
    path: PathBuf,
    /// The file it was copied from
    source: PathBuf,
    /// Role directory it was written to
    role: Role,
    /// Digest of the copied content
    digest: ContentHash,
    /// Number of bytes written
    len: u64,
}

impl MaterializedFile {
    pub fn new(
        path: impl Into<PathBuf>,
        source: impl Into<PathBuf>,
        role: Role,
        digest: ContentHash,
        len: u64,
    ) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
            role,
            digest,
            len,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn digest(&self) -> &ContentHash {
        &self.digest
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
