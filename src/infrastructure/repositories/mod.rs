//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod asset;
mod reference;

pub use asset::CsvAssetRepository;
pub use reference::CsvReferenceList;
