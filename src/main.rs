//! Gladius CLI
//!
//! Usage: gladius <COMMAND>
//!
//! Commands:
//!   init    Create the role directories
//!   ingest  Stage files once
//!   lines   Print a file split into lines
//!   watch   Watch a directory and stage new content

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = commands::Context::load(&cli)?;

    match cli.command {
        Commands::Init => commands::init::cmd_init(&ctx),
        Commands::Ingest { files } => commands::ingest::cmd_ingest(&ctx, &files),
        Commands::Lines { file } => commands::lines::cmd_lines(&ctx, &file),
        Commands::Watch {
            source,
            no_recursive,
        } => commands::watch::cmd_watch(&ctx, source.as_deref(), no_recursive),
    }
}

/// Initialize logging: `RUST_LOG` wins, otherwise `-v` count picks the level.
/// Logs go to stderr so NDJSON on stdout stays clean.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("{}={level}", env!("CARGO_CRATE_NAME")))),
        )
        .with_writer(std::io::stderr)
        .init();
}
