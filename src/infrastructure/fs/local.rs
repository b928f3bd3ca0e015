//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations. Every call
//! opens and closes its own handle.

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(e, path))
    }

    fn append(&self, path: &Path, content: &str) -> FsResult<()> {
        ensure_parent(path)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| FsError::from_io(e, path))?;
        file.write_all(content.as_bytes())
            .map_err(|e| FsError::from_io(e, path))
    }

    fn truncate(&self, path: &Path) -> FsResult<()> {
        ensure_parent(path)?;
        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .map(drop)
            .map_err(|e| FsError::from_io(e, path))
    }
}

fn ensure_parent(path: &Path) -> FsResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| FsError::from_io(e, parent))
        }
        _ => Ok(()),
    }
}
