//! Startup warranty notice

use chrono::NaiveDate;

/// How many warranties had expired on a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarrantyNotice {
    pub as_of: NaiveDate,
    pub expired: usize,
}

impl WarrantyNotice {
    pub fn has_expired(&self) -> bool {
        self.expired > 0
    }

    /// One-line message for the user
    pub fn message(&self) -> String {
        match self.expired {
            0 => "No expired warranties.".to_string(),
            1 => "1 asset has an expired warranty.".to_string(),
            n => format!("{} assets have expired warranties.", n),
        }
    }
}
