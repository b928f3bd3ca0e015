//! Asset Codec
//!
//! Converts between `AssetRecord` and one line of the asset file.
//!
//! The writer joins fields with `", "` while the reader splits on a bare
//! `','` and trims every field. Free text is never escaped, so a comma
//! inside a description or value does not survive a round trip; the reader
//! reports such lines with [`LoadWarning::ExtraFields`]. Names and
//! categories never hold a comma, and no field holds a line break, so
//! [`serialize`] always produces exactly one line.

use chrono::NaiveDate;

use crate::domain::entities::{AssetRecord, NO_DATE};
use crate::domain::value_objects::LoadWarning;
use crate::error::FieldError;

/// Delimiter used when writing a line
pub const FIELD_DELIMITER: &str = ", ";

/// Number of positional fields in a line
pub const FIELD_COUNT: usize = 7;

const ISO_DATE: &str = "%Y-%m-%d";

/// A record read from a line, plus anything that had to be degraded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAsset {
    pub record: AssetRecord,
    pub warnings: Vec<LoadWarning>,
}

/// Render a record as a single line (no terminator)
pub fn serialize(record: &AssetRecord) -> String {
    let purchase_date = format_date(record.purchase_date());
    let warranty = format_date(record.warranty_expiration_date());
    [
        record.name(),
        record.category(),
        record.location(),
        purchase_date.as_str(),
        record.description(),
        record.purchased_value(),
        warranty.as_str(),
    ]
    .join(FIELD_DELIMITER)
}

/// Parse one stored line
///
/// Returns `Err` only for structural problems that make the line unusable.
/// Unreadable dates degrade to `None` and are listed in
/// [`ParsedAsset::warnings`].
pub fn parse(line: &str) -> Result<ParsedAsset, LoadWarning> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < FIELD_COUNT {
        return Err(LoadWarning::MissingFields {
            found: fields.len(),
        });
    }

    let mut warnings = Vec::new();
    if fields.len() > FIELD_COUNT {
        warnings.push(LoadWarning::ExtraFields {
            found: fields.len(),
        });
    }

    let purchase_date = parse_date("purchase date", fields[3], &mut warnings);
    let warranty = parse_date("warranty expiration date", fields[6], &mut warnings);

    let record = AssetRecord::new(fields[0], fields[1], fields[2])
        .and_then(|record| record.with_description(Some(fields[4])))
        .and_then(|record| record.with_purchased_value(Some(fields[5])))
        .map_err(|err| match err {
            FieldError::Missing { field } => LoadWarning::BlankRequiredField { field },
            // A lone '\r' inside a line; `lines()` only strips it before '\n'
            FieldError::LineBreak { .. } | FieldError::Delimiter { .. } => {
                LoadWarning::InvalidRecord {
                    reason: err.to_string(),
                }
            }
        })?
        .with_purchase_date(purchase_date)
        .with_warranty_expiration(warranty);

    Ok(ParsedAsset { record, warnings })
}

/// Render an optional date as ISO-8601 or the placeholder
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format(ISO_DATE).to_string(),
        None => NO_DATE.to_string(),
    }
}

fn parse_date(
    field: &'static str,
    value: &str,
    warnings: &mut Vec<LoadWarning>,
) -> Option<NaiveDate> {
    // The placeholder match is case-sensitive.
    if value == NO_DATE || value.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(value, ISO_DATE) {
        Ok(date) => Some(date),
        Err(_) => {
            warnings.push(LoadWarning::MalformedDate {
                field,
                value: value.to_string(),
            });
            None
        }
    }
}
