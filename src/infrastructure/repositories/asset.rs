//! Delimited-text Asset Repository
//!
//! Implements the AssetRepository port over a flat file with one record per
//! line. Storage has no random-access update, so every edit or removal
//! truncates the file and writes the whole list back.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::entities::AssetRecord;
use crate::domain::ports::{AssetRepository, FileSystem, FsError};
use crate::domain::services::asset_codec;
use crate::domain::value_objects::{LineWarning, LoadReport, RewriteReport, WriteFailure};
use crate::error::{AssetError, AssetResult};
use crate::infrastructure::fs::{LocalFs, LINE_ENDING};

/// Asset repository backed by a delimited text file
///
/// Not safe to share between processes: two instances pointed at the same
/// path will overwrite each other's rewrites.
pub struct CsvAssetRepository<F: FileSystem = LocalFs> {
    fs: F,
    path: PathBuf,
    records: Vec<AssetRecord>,
}

impl CsvAssetRepository<LocalFs> {
    /// Create a repository on the local file system
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_fs(LocalFs::new(), path)
    }
}

impl<F: FileSystem> CsvAssetRepository<F> {
    /// Create with a custom file system (for testing)
    pub fn with_fs(fs: F, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
            records: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, err: FsError) -> AssetError {
        AssetError::Io {
            path: self.path.clone(),
            message: err.to_string(),
        }
    }

    fn check_index(&self, index: usize) -> AssetResult<()> {
        if index >= self.records.len() {
            return Err(AssetError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(())
    }
}

impl<F: FileSystem> AssetRepository for CsvAssetRepository<F> {
    fn load(&mut self) -> AssetResult<LoadReport> {
        let content = match self.fs.read(&self.path) {
            Ok(content) => content,
            Err(FsError::NotFound(_)) => {
                debug!(path = %self.path.display(), "asset file not found; starting empty");
                self.records.clear();
                return Ok(LoadReport::default());
            }
            Err(err) => return Err(self.io_error(err)),
        };

        let mut records = Vec::new();
        let mut warnings = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let line_no = idx + 1;
            match asset_codec::parse(line) {
                Ok(parsed) => {
                    for warning in parsed.warnings {
                        warn!(path = %self.path.display(), line = line_no, "{}", warning);
                        warnings.push(LineWarning {
                            line: line_no,
                            warning,
                        });
                    }
                    records.push(parsed.record);
                }
                Err(warning) => {
                    warn!(path = %self.path.display(), line = line_no, "{}", warning);
                    warnings.push(LineWarning {
                        line: line_no,
                        warning,
                    });
                }
            }
        }

        debug!(
            path = %self.path.display(),
            loaded = records.len(),
            warnings = warnings.len(),
            "loaded assets"
        );
        self.records = records;
        Ok(LoadReport {
            loaded: self.records.len(),
            file_found: true,
            warnings,
        })
    }

    fn records(&self) -> &[AssetRecord] {
        &self.records
    }

    fn add(&mut self, record: AssetRecord) -> AssetResult<()> {
        let line = format!("{}{}", asset_codec::serialize(&record), LINE_ENDING);
        self.fs
            .append(&self.path, &line)
            .map_err(|err| self.io_error(err))?;
        debug!(path = %self.path.display(), name = record.name(), "appended asset");
        self.records.push(record);
        Ok(())
    }

    fn replace(&mut self, index: usize, record: AssetRecord) -> AssetResult<RewriteReport> {
        self.check_index(index)?;
        self.records[index] = record;
        self.rewrite()
    }

    fn remove(&mut self, index: usize) -> AssetResult<(AssetRecord, RewriteReport)> {
        self.check_index(index)?;
        let removed = self.records.remove(index);
        let report = self.rewrite()?;
        Ok((removed, report))
    }

    fn rewrite(&self) -> AssetResult<RewriteReport> {
        self.fs
            .truncate(&self.path)
            .map_err(|err| self.io_error(err))?;

        // No rollback: a record that fails to write is reported and the
        // rest are still attempted.
        let mut report = RewriteReport::default();
        for (index, record) in self.records.iter().enumerate() {
            let line = format!("{}{}", asset_codec::serialize(record), LINE_ENDING);
            match self.fs.append(&self.path, &line) {
                Ok(()) => report.written += 1,
                Err(err) => {
                    warn!(path = %self.path.display(), index, error = %err, "failed to write asset");
                    report.failed.push(WriteFailure {
                        index,
                        message: err.to_string(),
                    });
                }
            }
        }

        debug!(
            path = %self.path.display(),
            written = report.written,
            failed = report.failed.len(),
            "rewrote asset file"
        );
        Ok(report)
    }
}
