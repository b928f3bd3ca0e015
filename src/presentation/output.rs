//! Output Rendering
//!
//! Text renderers return plain strings so commands decide where they go.
//! JSON views borrow from the records and serialize with `serde_json`.

use std::fmt::Write as _;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::{AssetRecord, ReferenceEntry};
use crate::domain::services::asset_codec::format_date;
use crate::domain::value_objects::{LoadReport, RewriteReport};

/// JSON shape of one asset
#[derive(Debug, Serialize)]
pub struct AssetView<'a> {
    pub index: usize,
    pub name: &'a str,
    pub category: &'a str,
    pub location: &'a str,
    pub purchase_date: Option<NaiveDate>,
    pub description: Option<&'a str>,
    pub purchased_value: Option<&'a str>,
    pub warranty_expiration_date: Option<NaiveDate>,
}

impl<'a> AssetView<'a> {
    pub fn new(index: usize, record: &'a AssetRecord) -> Self {
        Self {
            index,
            name: record.name(),
            category: record.category(),
            location: record.location(),
            purchase_date: record.purchase_date(),
            description: record.has_description().then(|| record.description()),
            purchased_value: record.has_purchased_value().then(|| record.purchased_value()),
            warranty_expiration_date: record.warranty_expiration_date(),
        }
    }
}

/// JSON shape of a rewrite outcome
#[derive(Debug, Serialize)]
pub struct RewriteView {
    pub written: usize,
    pub failed: Vec<usize>,
}

impl From<&RewriteReport> for RewriteView {
    fn from(report: &RewriteReport) -> Self {
        Self {
            written: report.written,
            failed: report.failed_indices(),
        }
    }
}

/// Collect indexed records into JSON views
pub fn asset_views<'a>(rows: &[(usize, &'a AssetRecord)]) -> Vec<AssetView<'a>> {
    rows.iter()
        .map(|(index, record)| AssetView::new(*index, record))
        .collect()
}

/// One line per asset: position, name, category, location and warranty
pub fn asset_table(rows: &[(usize, &AssetRecord)]) -> String {
    if rows.is_empty() {
        return "No assets.\n".to_string();
    }

    let name_width = rows
        .iter()
        .map(|(_, r)| r.name().chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (index, record) in rows {
        let _ = writeln!(
            out,
            "{:>3}  {:<width$}  {} @ {}  (warranty: {})",
            index,
            record.name(),
            record.category(),
            record.location(),
            format_date(record.warranty_expiration_date()),
            width = name_width,
        );
    }
    out
}

/// Every field of one asset, one per line
pub fn asset_detail(index: usize, record: &AssetRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Asset #{}", index);
    let _ = writeln!(out, "  Name:           {}", record.name());
    let _ = writeln!(out, "  Category:       {}", record.category());
    let _ = writeln!(out, "  Location:       {}", record.location());
    let _ = writeln!(out, "  Purchased:      {}", format_date(record.purchase_date()));
    let _ = writeln!(out, "  Description:    {}", record.description());
    let _ = writeln!(out, "  Value:          {}", record.purchased_value());
    let _ = writeln!(
        out,
        "  Warranty until: {}",
        format_date(record.warranty_expiration_date())
    );
    out
}

/// Location entries as `name - description`
pub fn reference_lines(entries: &[ReferenceEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        match &entry.description {
            Some(description) => {
                let _ = writeln!(out, "{} - {}", entry.name, description);
            }
            None => {
                let _ = writeln!(out, "{}", entry.name);
            }
        }
    }
    out
}

/// Warning lines for records that did not make it back to disk
pub fn rewrite_failures(report: &RewriteReport) -> Option<String> {
    if report.is_complete() {
        return None;
    }

    let mut out = format!(
        "Warning: asset file rewritten incompletely ({} of {} records written)\n",
        report.written,
        report.written + report.failed.len()
    );
    for failure in &report.failed {
        let _ = writeln!(out, "  #{}: {}", failure.index, failure.message);
    }
    Some(out)
}

/// Summary of problems found while loading, if any
pub fn load_summary(report: &LoadReport) -> Option<String> {
    if report.is_clean() {
        return None;
    }

    let skipped = report.skipped();
    Some(format!(
        "Loaded {} assets; {} line(s) skipped, {} warning(s). Run with -v for details.\n",
        report.loaded,
        skipped,
        report.warnings.len()
    ))
}
