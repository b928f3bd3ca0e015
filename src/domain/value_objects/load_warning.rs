//! Non-fatal problems found while reading stored asset lines.

use std::fmt;

/// A recoverable problem with one stored line
///
/// Structural warnings (`MissingFields`, `BlankRequiredField`,
/// `InvalidRecord`) mean the line was skipped. `ExtraFields` and `MalformedDate` mean the record was kept
/// with degraded content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// Fewer than seven comma-separated fields
    MissingFields { found: usize },
    /// More than seven fields; usually a comma inside free text
    ExtraFields { found: usize },
    /// Name, category or location empty after trimming
    BlankRequiredField { field: &'static str },
    /// A field the record model refuses, such as one holding a bare `\r`
    InvalidRecord { reason: String },
    /// Date field that is neither ISO-8601 nor the placeholder
    MalformedDate { field: &'static str, value: String },
}

impl LoadWarning {
    /// Whether the line was dropped from the loaded list
    pub fn skips_line(&self) -> bool {
        matches!(
            self,
            LoadWarning::MissingFields { .. }
                | LoadWarning::BlankRequiredField { .. }
                | LoadWarning::InvalidRecord { .. }
        )
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::MissingFields { found } => {
                write!(f, "expected 7 fields, found {}; line skipped", found)
            }
            LoadWarning::ExtraFields { found } => write!(
                f,
                "expected 7 fields, found {}; extra fields ignored",
                found
            ),
            LoadWarning::BlankRequiredField { field } => {
                write!(f, "required field '{}' is blank; line skipped", field)
            }
            LoadWarning::InvalidRecord { reason } => write!(f, "{}; line skipped", reason),
            LoadWarning::MalformedDate { field, value } => {
                write!(f, "unreadable {} '{}'; treated as no date", field, value)
            }
        }
    }
}

/// A warning tied to its 1-based line number in the source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineWarning {
    pub line: usize,
    pub warning: LoadWarning,
}

impl fmt::Display for LineWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.warning)
    }
}
