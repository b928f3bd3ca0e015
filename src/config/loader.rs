//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::types::{Config, OutputFormat};
use super::ConfigWarning;

/// Project-local config file name
pub const PROJECT_CONFIG_FILE: &str = "assetkeep.toml";

/// Environment variable overriding `storage.data_dir`
pub const ENV_DATA_DIR: &str = "ASSETKEEP_DATA_DIR";
/// Environment variable overriding `output.format`
pub const ENV_OUTPUT: &str = "ASSETKEEP_OUTPUT";
/// Environment variable overriding `log.filter`
pub const ENV_LOG: &str = "ASSETKEEP_LOG";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);
    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Explicit file, then `./assetkeep.toml`, then the user config file, then
/// defaults; environment overrides are applied last.
pub fn resolve(explicit: Option<&Path>) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    let project_config = PathBuf::from(PROJECT_CONFIG_FILE);
    if project_config.is_file() {
        let (config, warnings) = load_with_warnings(&project_config)?;
        return Ok((with_env_overrides(config), warnings));
    }

    if let Some(user_config) = user_config_path() {
        if user_config.is_file() {
            let (config, warnings) = load_with_warnings(&user_config)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// User config location (`<config_dir>/assetkeep/config.toml`)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("assetkeep").join("config.toml"))
}

/// Apply environment variable overrides (ASSETKEEP_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
        if !dir.trim().is_empty() {
            config.storage.data_dir = PathBuf::from(dir);
        }
    }

    if let Ok(format) = std::env::var(ENV_OUTPUT) {
        config.output.format = OutputFormat::from_name(&format);
    }

    if let Ok(filter) = std::env::var(ENV_LOG) {
        if !filter.trim().is_empty() {
            config.log.filter = filter;
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "storage",
        "data_dir",
        "assets_file",
        "categories_file",
        "locations_file",
        "output",
        "format",
        "log",
        "filter",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggest_key_finds_close_match() {
        assert_eq!(suggest_key("data_dri").as_deref(), Some("data_dir"));
        assert_eq!(suggest_key("completely_unrelated"), None);
    }

    #[test]
    fn levenshtein_basic() {
        assert_eq!(levenshtein("filter", "filter"), 0);
        assert_eq!(levenshtein("filtr", "filter"), 1);
        assert_eq!(levenshtein("", "log"), 3);
    }
}
