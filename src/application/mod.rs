//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `Inventory` - Add, edit, remove and query assets; register categories
//!   and locations

pub mod inventory;

pub use inventory::{today, Inventory, WarrantyNotice};
