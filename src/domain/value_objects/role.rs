//! Role value object - the two staging directories under the project root
//!
//! - `Out`: new, deduplicated content for downstream consumers
//! - `Junk`: parallel area, unused by the default create/modify flow

use std::path::{Path, PathBuf};

/// Staging role of a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Out,
    Junk,
}

impl Role {
    /// Literal directory name of this role under the project root
    pub fn dir_name(&self) -> &'static str {
        match self {
            Role::Out => "gladiushandler_out",
            Role::Junk => "junk",
        }
    }

    /// Directory of this role under `root`
    pub fn path_in(&self, root: &Path) -> PathBuf {
        root.join(self.dir_name())
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Out => write!(f, "out"),
            Role::Junk => write!(f, "junk"),
        }
    }
}
