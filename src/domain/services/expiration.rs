//! Warranty expiration queries
//!
//! Every query here goes through [`is_expired`], so listing and the
//! startup notice can never disagree about which records are expired.

use chrono::NaiveDate;

use crate::domain::entities::AssetRecord;

/// A record is expired when it has a warranty date and `as_of` is strictly
/// after it. Records without a warranty date never expire.
pub fn is_expired(record: &AssetRecord, as_of: NaiveDate) -> bool {
    record
        .warranty_expiration_date()
        .is_some_and(|expires| as_of > expires)
}

/// Expired records in input order
pub fn find_expired(records: &[AssetRecord], as_of: NaiveDate) -> Vec<&AssetRecord> {
    records
        .iter()
        .filter(|record| is_expired(record, as_of))
        .collect()
}

/// Expired records paired with their positions
pub fn find_expired_indexed(
    records: &[AssetRecord],
    as_of: NaiveDate,
) -> Vec<(usize, &AssetRecord)> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| is_expired(record, as_of))
        .collect()
}

/// Stops at the first expired record
pub fn has_any_expired(records: &[AssetRecord], as_of: NaiveDate) -> bool {
    records.iter().any(|record| is_expired(record, as_of))
}
