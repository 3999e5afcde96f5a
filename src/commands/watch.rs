use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use gladius::{watch, WatchOptions};

use super::Context;

pub fn cmd_watch(ctx: &Context, source: Option<&Path>, no_recursive: bool) -> Result<()> {
    let handler = ctx.handler()?;

    let source = match source {
        Some(path) => ctx.cwd.join(path),
        None => ctx.config.watch_source(&ctx.cwd),
    };
    let options =
        WatchOptions::new(source).with_recursive(ctx.config.watch.recursive && !no_recursive);

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to set Ctrl+C handler")?;

    watch(&handler, &options, running, |event| ctx.emit(&event))?;
    Ok(())
}
