//! Domain Entities
//!
//! - `AssetRecord` - A tracked physical asset
//! - `AssetDraft` - Raw form input that becomes an `AssetRecord`
//! - `ReferenceEntry` - A category or location list entry

mod asset;
mod reference;

pub use asset::{AssetDraft, AssetRecord, NO_DATE, NO_DESCRIPTION, NO_VALUE};
pub(crate) use asset::single_line;
pub use reference::{ReferenceEntry, ENTRY_DELIMITER};
