//! Watch loop

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, RecvTimeoutError};
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, info, warn};

use crate::application::{FsEvent, WatchHandler};
use crate::domain::ports::FileSystem;
use crate::error::GladiusResult;

use super::event::{WatchEvent, WatchOptions, POLL_MS};

/// Paths the loop must not feed back into the handler: its own role directories.
#[derive(Debug, Clone)]
pub struct StagingFilter {
    dirs: Vec<PathBuf>,
}

impl StagingFilter {
    pub fn for_handler<F: FileSystem>(handler: &WatchHandler<F>) -> Self {
        let mut dirs = Vec::new();
        for dir in [handler.outpath(), handler.junkpath()] {
            dirs.push(dir.to_path_buf());
            // notify reports resolved paths on some platforms (/var -> /private/var)
            if let Ok(canonical) = dir.canonicalize() {
                if canonical != dir {
                    dirs.push(canonical);
                }
            }
        }
        Self { dirs }
    }

    pub fn is_staging(&self, path: &Path) -> bool {
        self.dirs.iter().any(|dir| path.starts_with(dir))
    }
}

/// Start watching for file changes (blocking)
///
/// Returns once `running` is cleared. Failures of individual notifications are
/// reported through `on_event` and do not stop the loop; failing to set up the
/// watcher does.
pub fn watch<F: FileSystem>(
    handler: &WatchHandler<F>,
    options: &WatchOptions,
    running: Arc<AtomicBool>,
    on_event: impl Fn(WatchEvent),
) -> GladiusResult<()> {
    let (tx, rx) = channel();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<Event, notify::Error>| {
            let _ = tx.send(res);
        },
        Config::default(),
    )?;

    let mode = if options.recursive {
        RecursiveMode::Recursive
    } else {
        RecursiveMode::NonRecursive
    };
    watcher.watch(&options.source, mode)?;

    info!(source = %options.source.display(), out = %handler.outpath().display(), "watching");
    on_event(WatchEvent::WatchStarted {
        source: options.source.display().to_string(),
        out: handler.outpath().display().to_string(),
    });

    let filter = StagingFilter::for_handler(handler);

    while running.load(Ordering::SeqCst) {
        match rx.recv_timeout(Duration::from_millis(POLL_MS)) {
            Ok(Ok(event)) => handle_notify_event(handler, &filter, &event, &on_event),
            Ok(Err(e)) => {
                warn!(error = %e, "watcher backend error");
                on_event(WatchEvent::Error {
                    path: e.paths.first().map(|p| p.display().to_string()),
                    message: e.to_string(),
                });
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    on_event(WatchEvent::Shutdown);
    Ok(())
}

/// Feed one backend event through the handler, reporting each path's result.
pub fn handle_notify_event<F: FileSystem>(
    handler: &WatchHandler<F>,
    filter: &StagingFilter,
    event: &Event,
    on_event: &impl Fn(WatchEvent),
) {
    for fs_event in FsEvent::from_notify(event) {
        if filter.is_staging(&fs_event.src_path) {
            continue;
        }

        match handler.dispatch(&fs_event) {
            Ok(outcome) => on_event(WatchEvent::from_outcome(&fs_event.src_path, &outcome)),
            Err(e) => {
                warn!(path = %fs_event.src_path.display(), error = %e, "dropping event");
                on_event(WatchEvent::from_error(Some(fs_event.src_path.as_path()), &e));
            }
        }
        debug!(path = %fs_event.src_path.display(), kind = ?fs_event.kind, "handled");
    }
}
