//! Common test utilities for assetkeep CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated data directory plus helpers to run the binary
//! - Fixtures: Reusable asset lines and reference lists

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
