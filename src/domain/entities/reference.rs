//! Reference list entries (categories and locations)
//!
//! Both lists share one schema: a name plus an optional free-text
//! description. Categories are registered without a description.

use serde::Serialize;

/// Separator written between name and description
pub const ENTRY_DELIMITER: &str = ", ";

/// One line of a category or location list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceEntry {
    pub name: String,
    pub description: Option<String>,
}

impl ReferenceEntry {
    /// Entry without a description
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Entry with a description; blank descriptions are dropped
    pub fn described(name: impl Into<String>, description: Option<&str>) -> Self {
        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        Self {
            name: name.into(),
            description,
        }
    }

    /// Parse a stored line. No validation: whatever precedes the first
    /// comma is the name, the rest (if any) is the description.
    pub fn parse_line(line: &str) -> Self {
        match line.split_once(',') {
            Some((name, description)) => Self::described(name.trim(), Some(description)),
            None => Self::named(line.trim()),
        }
    }

    /// Render as a stored line (without terminator)
    pub fn to_line(&self) -> String {
        match &self.description {
            Some(description) => format!("{}{}{}", self.name, ENTRY_DELIMITER, description),
            None => self.name.clone(),
        }
    }
}
