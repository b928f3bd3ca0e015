//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod asset_repository;
pub mod file_system;
pub mod reference_list;

pub use asset_repository::AssetRepository;
pub use file_system::{FileSystem, FsError, FsResult};
pub use reference_list::ReferenceList;
