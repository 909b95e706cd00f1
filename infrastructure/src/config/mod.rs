//! Configuration file loading for cloudops
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CLOUDOPS_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./cloudops.toml` or `./.cloudops.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/cloudops/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileAuditConfig, FileConfig, FileLoggingConfig, FileOutputConfig, FileProviderConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
