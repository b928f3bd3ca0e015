//! Reference list files (categories, locations)
//!
//! One entry per line, optionally followed by `", description"`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::entities::ReferenceEntry;
use crate::domain::ports::{FileSystem, FsError, ReferenceList};
use crate::error::{AssetError, AssetResult};
use crate::infrastructure::fs::{LocalFs, LINE_ENDING};

/// Append-only name list stored as a text file
pub struct CsvReferenceList<F: FileSystem = LocalFs> {
    fs: F,
    path: PathBuf,
}

impl CsvReferenceList<LocalFs> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_fs(LocalFs::new(), path)
    }
}

impl<F: FileSystem> CsvReferenceList<F> {
    pub fn with_fs(fs: F, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
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
}

impl<F: FileSystem> ReferenceList for CsvReferenceList<F> {
    fn load_entries(&self) -> AssetResult<Vec<ReferenceEntry>> {
        let content = match self.fs.read(&self.path) {
            Ok(content) => content,
            Err(FsError::NotFound(_)) => return Ok(Vec::new()),
            Err(err) => return Err(self.io_error(err)),
        };

        Ok(content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(ReferenceEntry::parse_line)
            .collect())
    }

    fn append(&self, entry: &ReferenceEntry) -> AssetResult<()> {
        let line = format!("{}{}", entry.to_line(), LINE_ENDING);
        self.fs
            .append(&self.path, &line)
            .map_err(|err| self.io_error(err))?;
        debug!(path = %self.path.display(), name = %entry.name, "appended reference entry");
        Ok(())
    }
}
