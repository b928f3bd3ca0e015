//! Asset entity - one tracked physical item
//!
//! Records carry no identifier of their own. Identity is the position in the
//! ordered collection held by the asset repository.

use chrono::NaiveDate;

use crate::error::{FieldError, ValidationError};

/// Wire placeholder for an absent date
pub const NO_DATE: &str = "No date provided";
/// Default description when none was given
pub const NO_DESCRIPTION: &str = "No description provided";
/// Default purchased value when none was given
pub const NO_VALUE: &str = "No value provided";

/// Separator between a location name and its description; also the
/// field delimiter of the asset file
const SEPARATOR: char = ',';

/// A persisted asset record
///
/// Fields are private: every constructor runs the defaulting and
/// required-field rules, so `name`, `category` and `location` are never
/// empty in a value of this type. No text field holds a line break, and
/// `name` and `category` never hold the field delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRecord {
    name: String,
    category: String,
    location: String,
    purchase_date: Option<NaiveDate>,
    description: String,
    purchased_value: String,
    warranty_expiration_date: Option<NaiveDate>,
}

impl AssetRecord {
    /// Create a record with the required fields and default optional ones.
    ///
    /// `location` keeps only the text before the first separator, so a
    /// location list entry such as `"Garage, back shelf"` becomes `"Garage"`.
    pub fn new(
        name: impl AsRef<str>,
        category: impl AsRef<str>,
        location: impl AsRef<str>,
    ) -> Result<Self, FieldError> {
        let name = without_delimiter("name", required("name", name.as_ref())?)?;
        let category = without_delimiter("category", required("category", category.as_ref())?)?;
        let location = required("location", location_name(location.as_ref()))?;

        Ok(Self {
            name,
            category,
            location,
            purchase_date: None,
            description: NO_DESCRIPTION.to_string(),
            purchased_value: NO_VALUE.to_string(),
            warranty_expiration_date: None,
        })
    }

    /// Builder: set the purchase date
    pub fn with_purchase_date(mut self, date: Option<NaiveDate>) -> Self {
        self.purchase_date = date;
        self
    }

    /// Builder: set the description (blank falls back to the sentinel)
    ///
    /// Commas are accepted here and do not survive a reload; see
    /// [`asset_codec`](crate::domain::services::asset_codec).
    pub fn with_description(mut self, description: Option<&str>) -> Result<Self, FieldError> {
        self.description = or_sentinel("description", description, NO_DESCRIPTION)?;
        Ok(self)
    }

    /// Builder: set the purchased value (blank falls back to the sentinel)
    pub fn with_purchased_value(mut self, value: Option<&str>) -> Result<Self, FieldError> {
        self.purchased_value = or_sentinel("purchased value", value, NO_VALUE)?;
        Ok(self)
    }

    /// Builder: set the warranty expiration date
    pub fn with_warranty_expiration(mut self, date: Option<NaiveDate>) -> Self {
        self.warranty_expiration_date = date;
        self
    }

    // --- Getters ---

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn purchase_date(&self) -> Option<NaiveDate> {
        self.purchase_date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn purchased_value(&self) -> &str {
        &self.purchased_value
    }

    pub fn warranty_expiration_date(&self) -> Option<NaiveDate> {
        self.warranty_expiration_date
    }

    /// Whether the description is the default placeholder
    pub fn has_description(&self) -> bool {
        self.description != NO_DESCRIPTION
    }

    /// Whether the purchased value is the default placeholder
    pub fn has_purchased_value(&self) -> bool {
        self.purchased_value != NO_VALUE
    }
}

/// Raw field input for creating or replacing a record
///
/// This is what a form (or the CLI) hands to the inventory: seven values,
/// some of them optional, none validated yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetDraft {
    pub name: String,
    pub category: String,
    pub location: String,
    pub purchase_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub purchased_value: Option<String>,
    pub warranty_expiration_date: Option<NaiveDate>,
}

impl AssetDraft {
    /// Apply the defaulting rules and validate required fields
    pub fn into_record(self) -> Result<AssetRecord, ValidationError> {
        Ok(AssetRecord::new(&self.name, &self.category, &self.location)?
            .with_purchase_date(self.purchase_date)
            .with_description(self.description.as_deref())?
            .with_purchased_value(self.purchased_value.as_deref())?
            .with_warranty_expiration(self.warranty_expiration_date))
    }
}

impl From<&AssetRecord> for AssetDraft {
    fn from(record: &AssetRecord) -> Self {
        Self {
            name: record.name.clone(),
            category: record.category.clone(),
            location: record.location.clone(),
            purchase_date: record.purchase_date,
            description: record
                .has_description()
                .then(|| record.description.clone()),
            purchased_value: record
                .has_purchased_value()
                .then(|| record.purchased_value.clone()),
            warranty_expiration_date: record.warranty_expiration_date,
        }
    }
}

/// Reject text that would span more than one stored line
pub(crate) fn single_line(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.contains(['\n', '\r']) {
        return Err(FieldError::LineBreak { field });
    }
    Ok(())
}

fn required(field: &'static str, value: &str) -> Result<String, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Missing { field });
    }
    single_line(field, trimmed)?;
    Ok(trimmed.to_string())
}

fn without_delimiter(field: &'static str, value: String) -> Result<String, FieldError> {
    if value.contains(SEPARATOR) {
        return Err(FieldError::Delimiter { field });
    }
    Ok(value)
}

fn location_name(value: &str) -> &str {
    value.split(SEPARATOR).next().unwrap_or(value)
}

fn or_sentinel(
    field: &'static str,
    value: Option<&str>,
    sentinel: &str,
) -> Result<String, FieldError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => {
            single_line(field, v)?;
            Ok(v.to_string())
        }
        _ => Ok(sentinel.to_string()),
    }
}
