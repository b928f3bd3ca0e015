//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod local;

pub use local::LocalFs;

/// Line terminator written after every stored line
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };
