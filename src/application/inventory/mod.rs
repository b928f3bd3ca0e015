//! Inventory Use Case Module
//!
//! Form-level operations over assets and their reference lists.

mod notice;
mod use_case;


pub use notice::WarrantyNotice;
pub use use_case::{today, Inventory};
