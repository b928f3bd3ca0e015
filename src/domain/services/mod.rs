//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

pub mod asset_codec;
mod expiration;

pub use asset_codec::{ParsedAsset, FIELD_COUNT, FIELD_DELIMITER};
pub use expiration::{find_expired, find_expired_indexed, has_any_expired, is_expired};
