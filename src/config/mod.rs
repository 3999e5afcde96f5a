//! Configuration module for Gladius
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (GLADIUS_*)
//! 3. Explicit `--config` file, else `./gladius.toml`
//! 4. User config (~/.config/gladius/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    resolve, with_env_overrides_from, ConfigWarning, LoadedConfig,
    PROJECT_CONFIG_FILE,
};
pub use types::{Config, OutputConfig, WatchConfig};
