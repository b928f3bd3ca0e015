//! ReferenceList port - append-only category/location lists

use crate::domain::entities::ReferenceEntry;
use crate::error::AssetResult;

/// Append-only list of reference names
///
/// Duplicates are kept: neither loading nor appending de-duplicates.
pub trait ReferenceList {
    /// Every entry in stored order; a missing file is an empty list
    fn load_entries(&self) -> AssetResult<Vec<ReferenceEntry>>;

    /// Add one entry at the end of the list
    fn append(&self, entry: &ReferenceEntry) -> AssetResult<()>;

    /// Entry names in stored order
    fn load_names(&self) -> AssetResult<Vec<String>> {
        Ok(self
            .load_entries()?
            .into_iter()
            .map(|entry| entry.name)
            .collect())
    }

    /// Whether any entry carries exactly this name
    fn contains(&self, name: &str) -> AssetResult<bool> {
        Ok(self.load_entries()?.iter().any(|entry| entry.name == name))
    }
}
