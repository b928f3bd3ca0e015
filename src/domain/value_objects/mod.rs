//! Domain Value Objects
//!
//! Immutable value types that describe outcomes and warnings.

mod config_warning;
mod load_warning;
mod report;

pub use config_warning::ConfigWarning;
pub use load_warning::{LineWarning, LoadWarning};
pub use report::{LoadReport, RewriteReport, WriteFailure};
