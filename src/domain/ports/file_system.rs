//! FileSystem port - abstraction over file I/O operations
//!
//! Repositories talk to storage through this trait so tests can swap in
//! in-memory or deliberately failing implementations.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, Error)]
pub enum FsError {
    /// File not found
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Permission denied
    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    /// I/O error
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Other error
    #[error("{0}")]
    Other(String),
}

impl FsError {
    /// Classify an `io::Error` raised while touching `path`
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - test doubles in unit and integration tests
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Append content to the end of a file, creating it (and its parent
    /// directories) when absent
    fn append(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Truncate a file to zero length, creating it when absent
    fn truncate(&self, path: &Path) -> FsResult<()>;
}
