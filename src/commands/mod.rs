//! Command implementations for the `gladius` binary

pub mod ingest;
pub mod init;
pub mod lines;
pub mod watch;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use gladius::config::{self, Config};
use gladius::{WatchEvent, WatchHandler};
use tracing::warn;

use crate::cli::Cli;

/// Resolved settings shared by all commands
pub struct Context {
    pub config: Config,
    pub cwd: PathBuf,
    pub json: bool,
}

impl Context {
    /// Resolve config file, environment and CLI flags
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to determine working directory")?;
        let loaded = config::resolve(cli.config.as_deref(), &cwd)?;
        for warning in &loaded.warnings {
            warn!("{warning}");
        }

        let mut config = loaded.config;
        if let Some(root) = &cli.root {
            config.root = Some(root.clone());
        }

        Ok(Self {
            config,
            cwd,
            json: cli.json,
        })
    }

    /// Build a handler, creating the role directories if needed
    pub fn handler(&self) -> Result<WatchHandler> {
        WatchHandler::new(self.config.handler_options(&self.cwd))
            .context("failed to initialize staging directories")
    }

    /// Print an event as NDJSON or as a human-readable line
    pub fn emit(&self, event: &WatchEvent) {
        if self.json {
            println!("{}", event.to_json());
            return;
        }
        match event {
            WatchEvent::Error { .. } => eprintln!("{}", render_event(event)),
            _ => println!("{}", render_event(event)),
        }
    }
}

pub fn render_event(event: &WatchEvent) -> String {
    match event {
        WatchEvent::WatchStarted { source, out } => {
            format!("Watching {source}\nStaging into {out}\nPress Ctrl+C to stop.")
        }
        WatchEvent::Materialized { source, output, .. } => format!("staged  {source} -> {output}"),
        WatchEvent::Duplicate { source, digest } => {
            let digest = gladius::ContentHash::new(digest);
            format!("dup     {source} ({})", digest.short())
        }
        WatchEvent::SkippedDirectory { path } => format!("skip    {path}/"),
        WatchEvent::Error { path: Some(path), message } => format!("error   {path}: {message}"),
        WatchEvent::Error { path: None, message } => format!("error   {message}"),
        WatchEvent::Shutdown => "Stopped.".to_string(),
    }
}
