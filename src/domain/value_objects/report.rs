//! Outcome summaries for repository operations.

use super::LineWarning;

/// Result of loading the asset file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of records now held in memory
    pub loaded: usize,
    /// Whether the backing file existed at all
    pub file_found: bool,
    pub warnings: Vec<LineWarning>,
}

impl LoadReport {
    /// Number of lines that were dropped
    pub fn skipped(&self) -> usize {
        self.warnings
            .iter()
            .filter(|w| w.warning.skips_line())
            .count()
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// A record that could not be written during a rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteFailure {
    pub index: usize,
    pub message: String,
}

/// Result of truncating and re-serializing the asset file
///
/// The file is not restored when a record fails to write; callers should
/// surface `failed` to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteReport {
    pub written: usize,
    pub failed: Vec<WriteFailure>,
}

impl RewriteReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn failed_indices(&self) -> Vec<usize> {
        self.failed.iter().map(|f| f.index).collect()
    }
}
