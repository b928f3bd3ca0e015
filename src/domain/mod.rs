//! Domain Layer
//!
//! The asset model and the rules around it, without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (AssetRecord, ReferenceEntry)
//! - `value_objects/` - Immutable value types (LoadWarning, reports)
//! - `services/` - Domain services (asset codec, expiration queries)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
