//! Configuration module for assetkeep
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ASSETKEEP_*)
//! 3. Explicit `--config` file, else `./assetkeep.toml`
//! 4. User config (`<config_dir>/assetkeep/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{
    user_config_path, with_env_overrides, ConfigError, ENV_DATA_DIR, ENV_LOG, ENV_OUTPUT,
    PROJECT_CONFIG_FILE,
};
pub use types::{Config, LogConfig, OutputConfig, OutputFormat, StorageConfig};
