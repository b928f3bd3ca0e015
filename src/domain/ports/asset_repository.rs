//! AssetRepository port - ordered, position-addressed asset storage
//!
//! The repository owns the in-memory list. Positions are the only identity
//! a record has, so every mutation keeps the order of untouched records.

use crate::domain::entities::AssetRecord;
use crate::domain::value_objects::{LoadReport, RewriteReport};
use crate::error::AssetResult;

/// Abstract repository for asset records
///
/// Implemented by the infrastructure layer.
pub trait AssetRepository {
    /// Replace the in-memory list with the stored records.
    ///
    /// A missing backing file yields an empty list, not an error.
    fn load(&mut self) -> AssetResult<LoadReport>;

    /// Records in stored order
    fn records(&self) -> &[AssetRecord];

    /// Append a record in memory and to storage
    fn add(&mut self, record: AssetRecord) -> AssetResult<()>;

    /// Replace the record at `index` and rewrite storage
    fn replace(&mut self, index: usize, record: AssetRecord) -> AssetResult<RewriteReport>;

    /// Remove the record at `index` and rewrite storage
    fn remove(&mut self, index: usize) -> AssetResult<(AssetRecord, RewriteReport)>;

    /// Truncate storage and write every record in current order
    fn rewrite(&self) -> AssetResult<RewriteReport>;

    fn get(&self, index: usize) -> Option<&AssetRecord> {
        self.records().get(index)
    }

    fn len(&self) -> usize {
        self.records().len()
    }

    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}
