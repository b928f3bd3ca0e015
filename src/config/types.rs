//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::loader::{self, ConfigError};
use super::ConfigWarning;

/// Where the three data files live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_assets_file")]
    pub assets_file: String,

    #[serde(default = "default_categories_file")]
    pub categories_file: String,

    #[serde(default = "default_locations_file")]
    pub locations_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            assets_file: default_assets_file(),
            categories_file: default_categories_file(),
            locations_file: default_locations_file(),
        }
    }
}

impl StorageConfig {
    pub fn assets_path(&self) -> PathBuf {
        self.data_dir.join(&self.assets_file)
    }

    pub fn categories_path(&self) -> PathBuf {
        self.data_dir.join(&self.categories_file)
    }

    pub fn locations_path(&self) -> PathBuf {
        self.data_dir.join(&self.locations_file)
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_assets_file() -> String {
    "assets.csv".to_string()
}

fn default_categories_file() -> String {
    "categories.csv".to_string()
}

fn default_locations_file() -> String {
    "locations.csv".to_string()
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Parse a format name; unknown names fall back to text
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter directive, e.g. `warn` or `assetkeep=debug`
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "warn".to_string()
}

/// Full configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_with_warnings(path)
    }

    /// Resolve the effective configuration (explicit file, project file,
    /// user file, defaults) with environment overrides applied
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::resolve(explicit)
    }
}
