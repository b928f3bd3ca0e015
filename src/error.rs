//! Error types for assetkeep
//!
//! Library errors use `thiserror`; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for asset operations
pub type AssetResult<T> = Result<T, AssetError>;

/// Main error type for repository and inventory operations
#[derive(Error, Debug)]
pub enum AssetError {
    /// Input rejected before anything was persisted
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backing file present but unreadable, or not writable
    #[error("I/O error on {path}: {message}")]
    Io { path: PathBuf, message: String },

    /// Positional access outside the loaded record list
    #[error("no asset at index {index} (have {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// A single field that cannot be stored on one line of the asset file
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Required field absent or blank
    #[error("missing required field '{field}'")]
    Missing { field: &'static str },

    /// Stored lines cannot hold `\n` or `\r`
    #[error("field '{field}' must not contain a line break")]
    LineBreak { field: &'static str },

    /// The field delimiter would shift every following field
    #[error("field '{field}' must not contain ','")]
    Delimiter { field: &'static str },
}

/// Field-level problems with user-supplied input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(transparent)]
    Field(#[from] FieldError),

    /// Category not present in the category list
    #[error("unknown category '{name}' (register it with `assetkeep category add`)")]
    UnknownCategory { name: String },

    /// Location not present in the location list
    #[error("unknown location '{name}' (register it with `assetkeep location add`)")]
    UnknownLocation { name: String },

    /// Reference list names must contain text
    #[error("{list} name must not be blank")]
    BlankName { list: &'static str },
}
