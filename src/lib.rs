//! assetkeep - asset inventory with warranty tracking
//!
//! Assets are kept in a plain delimited text file, one record per line, next
//! to two reference lists (categories and locations) that new and edited
//! assets are validated against. The whole asset file is rewritten on every
//! edit or removal.
//!
//! ## Layers
//!
//! - `domain` - Records, the line codec, expiration queries and the ports
//! - `infrastructure` - Local file system and CSV-backed repositories
//! - `application` - The [`Inventory`] use case
//! - `config` - TOML configuration with environment overrides
//! - `presentation` - CLI definition and output rendering

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{today, Inventory, WarrantyNotice};
pub use config::{Config, OutputFormat};
pub use domain::entities::{AssetDraft, AssetRecord, ReferenceEntry};
pub use domain::services::asset_codec;
pub use domain::value_objects::{LoadReport, LoadWarning, RewriteReport};
pub use error::{AssetError, AssetResult, FieldError, ValidationError};
pub use infrastructure::{CsvAssetRepository, CsvReferenceList, LocalFs};
