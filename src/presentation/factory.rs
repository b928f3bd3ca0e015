//! Inventory Factory
//!
//! The dependency injection point: wires the inventory use case to the
//! CSV files named by the storage config.

use crate::application::Inventory;
use crate::config::StorageConfig;
use crate::infrastructure::{CsvAssetRepository, CsvReferenceList, LocalFs};

/// The inventory backed by local CSV files
pub type FileInventory = Inventory<CsvAssetRepository<LocalFs>, CsvReferenceList<LocalFs>>;

/// Build an inventory over the configured data files.
///
/// Nothing is read yet; call [`Inventory::load`] before querying assets.
pub fn open_inventory(storage: &StorageConfig) -> FileInventory {
    tracing::debug!(
        assets = %storage.assets_path().display(),
        categories = %storage.categories_path().display(),
        locations = %storage.locations_path().display(),
        "opening inventory"
    );

    Inventory::new(
        CsvAssetRepository::new(storage.assets_path()),
        CsvReferenceList::new(storage.categories_path()),
        CsvReferenceList::new(storage.locations_path()),
    )
}
