//! Inventory Use Case
//!
//! The entry point presentation code calls with raw form values.

use chrono::{Local, NaiveDate};

use crate::domain::entities::{single_line, AssetDraft, AssetRecord, ReferenceEntry};
use crate::domain::ports::{AssetRepository, ReferenceList};
use crate::domain::services::{find_expired, find_expired_indexed, has_any_expired};
use crate::domain::value_objects::{LoadReport, RewriteReport};
use crate::error::{AssetError, AssetResult, FieldError, ValidationError};

use super::notice::WarrantyNotice;

/// Asset inventory - validates input against the reference lists and
/// drives the asset repository
pub struct Inventory<AR, RL>
where
    AR: AssetRepository,
    RL: ReferenceList,
{
    assets: AR,
    categories: RL,
    locations: RL,
}

impl<AR, RL> Inventory<AR, RL>
where
    AR: AssetRepository,
    RL: ReferenceList,
{
    pub fn new(assets: AR, categories: RL, locations: RL) -> Self {
        Self {
            assets,
            categories,
            locations,
        }
    }

    /// Load (or reload) the asset list from storage
    pub fn load(&mut self) -> AssetResult<LoadReport> {
        self.assets.load()
    }

    pub fn assets(&self) -> &[AssetRecord] {
        self.assets.records()
    }

    pub fn asset(&self, index: usize) -> AssetResult<&AssetRecord> {
        self.assets
            .get(index)
            .ok_or(AssetError::IndexOutOfRange {
                index,
                len: self.assets.len(),
            })
    }

    pub fn categories(&self) -> AssetResult<Vec<String>> {
        self.categories.load_names()
    }

    pub fn locations(&self) -> AssetResult<Vec<ReferenceEntry>> {
        self.locations.load_entries()
    }

    pub fn register_category(&self, name: &str) -> AssetResult<ReferenceEntry> {
        let entry = ReferenceEntry::named(reference_name(name, "category")?);
        self.categories.append(&entry)?;
        Ok(entry)
    }

    pub fn register_location(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> AssetResult<ReferenceEntry> {
        let name = reference_name(name, "location")?;
        if let Some(description) = description {
            single_line("location description", description).map_err(ValidationError::from)?;
        }
        let entry = ReferenceEntry::described(name, description);
        self.locations.append(&entry)?;
        Ok(entry)
    }

    /// Validate a draft and append it; returns the new record's position
    pub fn add_asset(&mut self, draft: AssetDraft) -> AssetResult<usize> {
        let record = self.validate(draft)?;
        self.assets.add(record)?;
        Ok(self.assets.len() - 1)
    }

    /// Validate a draft and replace the record at `index` with it
    pub fn edit_asset(&mut self, index: usize, draft: AssetDraft) -> AssetResult<RewriteReport> {
        self.asset(index)?;
        let record = self.validate(draft)?;
        self.assets.replace(index, record)
    }

    pub fn remove_asset(&mut self, index: usize) -> AssetResult<(AssetRecord, RewriteReport)> {
        self.assets.remove(index)
    }

    /// Records whose warranty expired before `as_of` (default: today)
    pub fn expired(&self, as_of: Option<NaiveDate>) -> Vec<(usize, &AssetRecord)> {
        find_expired_indexed(self.assets.records(), as_of.unwrap_or_else(today))
    }

    /// Summary shown when the application starts
    pub fn warranty_notice(&self, as_of: Option<NaiveDate>) -> WarrantyNotice {
        let as_of = as_of.unwrap_or_else(today);
        let records = self.assets.records();
        let expired = if has_any_expired(records, as_of) {
            find_expired(records, as_of).len()
        } else {
            0
        };
        WarrantyNotice { as_of, expired }
    }

    fn validate(&self, draft: AssetDraft) -> AssetResult<AssetRecord> {
        let record = draft.into_record()?;

        if !self.categories.contains(record.category())? {
            return Err(ValidationError::UnknownCategory {
                name: record.category().to_string(),
            }
            .into());
        }
        if !self.locations.contains(record.location())? {
            return Err(ValidationError::UnknownLocation {
                name: record.location().to_string(),
            }
            .into());
        }
        Ok(record)
    }
}

/// The local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// A name must read back unchanged from its list file, so it cannot hold
/// the name/description separator or a line break
fn reference_name<'a>(name: &'a str, list: &'static str) -> Result<&'a str, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankName { list });
    }
    single_line(list, trimmed)?;
    if trimmed.contains(',') {
        return Err(FieldError::Delimiter { field: list }.into());
    }
    Ok(trimmed)
}
