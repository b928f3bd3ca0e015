//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Wiring the inventory to the CSV-backed repositories
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Builds an [`Inventory`](crate::application::Inventory) from
//!   the storage config
//! - `output` - Text and JSON rendering of records and reports

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{CategoryCommand, Cli, Commands, LocationCommand};
pub use factory::{open_inventory, FileInventory};
