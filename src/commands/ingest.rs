use std::path::PathBuf;

use anyhow::Result;
use gladius::WatchEvent;

use super::Context;

/// Run each file through the creation handler once, sharing one cache.
/// Stops at the first failure.
pub fn cmd_ingest(ctx: &Context, files: &[PathBuf]) -> Result<()> {
    let handler = ctx.handler()?;

    for file in files {
        match handler.on_created(file) {
            Ok(outcome) => ctx.emit(&WatchEvent::from_outcome(file, &outcome)),
            Err(e) => {
                if ctx.json {
                    ctx.emit(&WatchEvent::from_error(Some(file.as_path()), &e));
                }
                return Err(e.into());
            }
        }
    }
    Ok(())
}
