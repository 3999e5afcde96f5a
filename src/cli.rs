use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Gladius - stage new file content, once per digest
#[derive(Parser, Debug)]
#[command(name = "gladius")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./gladius.toml, then ~/.config/gladius/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Project root holding gladiushandler_out/ and junk/
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the role directories and print their paths
    Init,

    /// Stage the given files once, as if each had just been created
    Ingest {
        /// Files to stage, in order
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Print a file split into lines
    Lines {
        /// File to read
        file: PathBuf,
    },

    /// Watch a directory and stage new content until Ctrl+C
    Watch {
        /// Directory to watch (defaults to config, then the working directory)
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Only watch the top level of the source directory
        #[arg(long)]
        no_recursive: bool,
    },
}
