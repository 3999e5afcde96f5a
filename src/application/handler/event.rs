//! Source events delivered to the handler

use std::path::{Path, PathBuf};

/// Anything that names the file a notification is about.
pub trait SourceEvent {
    fn src_path(&self) -> &Path;
}

impl SourceEvent for Path {
    fn src_path(&self) -> &Path {
        self
    }
}

impl SourceEvent for PathBuf {
    fn src_path(&self) -> &Path {
        self
    }
}

impl<T: SourceEvent + ?Sized> SourceEvent for &T {
    fn src_path(&self) -> &Path {
        (**self).src_path()
    }
}

/// First path of a raw `notify` event (empty when the backend sent none).
impl SourceEvent for notify::Event {
    fn src_path(&self) -> &Path {
        self.paths
            .first()
            .map(PathBuf::as_path)
            .unwrap_or_else(|| Path::new(""))
    }
}

/// Kind of filesystem change the handler reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsEventKind {
    Created,
    Modified,
}

/// A single-path notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsEvent {
    pub kind: FsEventKind,
    pub src_path: PathBuf,
}

impl FsEvent {
    pub fn created(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: FsEventKind::Created,
            src_path: path.into(),
        }
    }

    pub fn modified(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: FsEventKind::Modified,
            src_path: path.into(),
        }
    }

    /// Split a `notify` event into one event per path.
    ///
    /// Returns an empty vec for kinds the handler does not care about
    /// (access, remove, ...). Renames only yield the destination: the old
    /// name no longer exists.
    pub fn from_notify(event: &notify::Event) -> Vec<Self> {
        use notify::event::{ModifyKind, RenameMode};
        use notify::EventKind;

        let (kind, paths) = match event.kind {
            EventKind::Create(_) => (FsEventKind::Created, event.paths.as_slice()),
            EventKind::Modify(ModifyKind::Name(RenameMode::From)) => return Vec::new(),
            EventKind::Modify(ModifyKind::Name(RenameMode::Both)) => {
                (FsEventKind::Modified, event.paths.get(1..).unwrap_or_default())
            }
            EventKind::Modify(_) => (FsEventKind::Modified, event.paths.as_slice()),
            _ => return Vec::new(),
        };
        paths
            .iter()
            .map(|path| Self {
                kind,
                src_path: path.clone(),
            })
            .collect()
    }
}

impl SourceEvent for FsEvent {
    fn src_path(&self) -> &Path {
        &self.src_path
    }
}
