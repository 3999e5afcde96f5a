//! Watch Handler implementation

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info, warn};

use crate::domain::entities::{DedupCache, MaterializedFile};
use crate::domain::ports::{FileSystem, OutputFile};
use crate::domain::value_objects::{ContentHash, Role};
use crate::error::{GladiusError, GladiusResult};
use crate::infrastructure::LocalFs;

use super::event::{FsEvent, FsEventKind, SourceEvent};
use super::options::HandlerOptions;
use crate::application::paths::PathInitializer;

/// What happened to a single notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The path was a directory; nothing was read
    SkippedDirectory,
    /// The content was already staged
    Duplicate { digest: ContentHash },
    /// New content was staged into the out directory
    Materialized(MaterializedFile),
}

impl Outcome {
    pub fn is_materialized(&self) -> bool {
        matches!(self, Outcome::Materialized(_))
    }

    pub fn materialized(&self) -> Option<&MaterializedFile> {
        match self {
            Outcome::Materialized(file) => Some(file),
            _ => None,
        }
    }
}

/// Deduplicating stager for filesystem notifications.
///
/// Construction creates the role directories; a handler is never observable in
/// a half-initialized state. The dedup cache and output allocation share one
/// lock, so concurrent notifications for the same content stage it once.
pub struct WatchHandler<F: FileSystem = LocalFs> {
    pub(super) fs: F,
    options: HandlerOptions,
    root: PathBuf,
    outpath: PathBuf,
    junkpath: PathBuf,
    cache: Mutex<DedupCache>,
}

impl WatchHandler<LocalFs> {
    /// Create a handler over the local disk
    pub fn new(options: HandlerOptions) -> GladiusResult<Self> {
        Self::with_fs(LocalFs::new(), options)
    }
}

impl<F: FileSystem> WatchHandler<F> {
    /// Create a handler over an arbitrary filesystem implementation
    pub fn with_fs(fs: F, options: HandlerOptions) -> GladiusResult<Self> {
        let root = std::path::absolute(&options.root_directory).map_err(|e| {
            GladiusError::Init {
                path: options.root_directory.clone(),
                source: e,
            }
        })?;
        let outpath = Role::Out.path_in(&root);
        let junkpath = Role::Junk.path_in(&root);

        let init = PathInitializer::new(&fs);
        init.ensure(&outpath)?;
        init.ensure(&junkpath)?;

        Ok(Self {
            fs,
            options,
            root,
            outpath,
            junkpath,
            cache: Mutex::new(DedupCache::new()),
        })
    }

    /// Start from a pre-populated cache instead of an empty one
    pub fn with_cache(self, cache: DedupCache) -> Self {
        Self {
            cache: Mutex::new(cache),
            ..self
        }
    }

    /// Absolute project root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of the out role directory
    pub fn outpath(&self) -> &Path {
        &self.outpath
    }

    /// Absolute path of the junk role directory
    pub fn junkpath(&self) -> &Path {
        &self.junkpath
    }

    /// Directory for a role
    pub fn role_path(&self, role: Role) -> &Path {
        match role {
            Role::Out => &self.outpath,
            Role::Junk => &self.junkpath,
        }
    }

    /// Copy of the cached digests, in insertion order
    pub fn cache_snapshot(&self) -> Vec<ContentHash> {
        self.lock_cache().digests().to_vec()
    }

    /// Handle a creation notification.
    ///
    /// Directories are skipped without being read. Otherwise the full content
    /// is read and hashed; unseen content is copied into a new file in the out
    /// directory, seen content is left alone.
    pub fn on_created<E: SourceEvent + ?Sized>(&self, event: &E) -> GladiusResult<Outcome> {
        let src = event.src_path();
        if self.fs.is_dir(src) {
            debug!(path = %src.display(), "skipping directory");
            return Ok(Outcome::SkippedDirectory);
        }

        let content = self.fs.read(src).map_err(|e| GladiusError::Read {
            path: src.to_path_buf(),
            source: e.into(),
        })?;
        let digest = ContentHash::from_bytes(&content);

        let mut cache = self.lock_cache();
        if !cache.insert(digest.clone()) {
            debug!(path = %src.display(), digest = digest.short(), "duplicate content");
            return Ok(Outcome::Duplicate { digest });
        }

        match self.materialize(Role::Out, src, &content, &digest) {
            Ok(file) => Ok(Outcome::Materialized(file)),
            Err(e) => {
                // keep the cache limited to digests that actually reached disk
                cache.forget(&digest);
                Err(e)
            }
        }
    }

    /// Handle a modification notification exactly like a creation.
    pub fn on_modified<E: SourceEvent + ?Sized>(&self, event: &E) -> GladiusResult<Outcome> {
        self.on_created(event)
    }

    /// Route an event to `on_created` or `on_modified` by kind
    pub fn dispatch(&self, event: &FsEvent) -> GladiusResult<Outcome> {
        match event.kind {
            FsEventKind::Created => self.on_created(event),
            FsEventKind::Modified => self.on_modified(event),
        }
    }

    /// Allocate a new, empty, persistent file in the out directory
    pub fn get_outfile(&self, suffix: &str) -> GladiusResult<OutputFile> {
        let _guard = self.lock_cache();
        self.allocate(Role::Out, suffix)
    }

    /// Allocate a new, empty, persistent file in the junk directory
    pub fn get_junkfile(&self, suffix: &str) -> GladiusResult<OutputFile> {
        let _guard = self.lock_cache();
        self.allocate(Role::Junk, suffix)
    }

    /// Read a source and split it on `\n`.
    ///
    /// Does not touch the cache or write anything.
    pub fn get_lines<E: SourceEvent + ?Sized>(&self, event: &E) -> GladiusResult<Vec<String>> {
        let src = event.src_path();
        let content = self
            .fs
            .read_to_string(src)
            .map_err(|e| GladiusError::Read {
                path: src.to_path_buf(),
                source: e.into(),
            })?;
        Ok(content.split('\n').map(str::to_string).collect())
    }

    fn allocate(&self, role: Role, suffix: &str) -> GladiusResult<OutputFile> {
        let dir = self.role_path(role);
        self.fs
            .create_unique(dir, &self.options.prefix, suffix)
            .map_err(|e| GladiusError::Allocate {
                dir: dir.to_path_buf(),
                source: e.into(),
            })
    }

    fn materialize(
        &self,
        role: Role,
        src: &Path,
        content: &[u8],
        digest: &ContentHash,
    ) -> GladiusResult<MaterializedFile> {
        let mut out = self.allocate(role, &self.options.suffix)?;
        if let Err(e) = out.write_durable(content) {
            let path = out.into_path();
            // a partial copy must never be visible to consumers of the role directory
            if let Err(cleanup) = self.fs.remove_file(&path) {
                warn!(path = %path.display(), error = %cleanup, "failed to remove partial output");
            }
            return Err(GladiusError::Write { path, source: e });
        }
        let path = out.into_path();

        info!(
            source = %src.display(),
            output = %path.display(),
            digest = digest.short(),
            "materialized"
        );
        Ok(MaterializedFile::new(
            path,
            src,
            role,
            digest.clone(),
            content.len() as u64,
        ))
    }

    fn lock_cache(&self) -> MutexGuard<'_, DedupCache> {
        // The cache is append-only, so a panic elsewhere cannot leave it torn.
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
