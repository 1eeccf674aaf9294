//! # Catalog Data Model
//!
//! Domain models for the assembled catalog and the persisted snapshot
//! document.
//!
//! ## Overview
//!
//! This crate holds:
//! - `CatalogRecord` and its invariants (unique monotonic ids, clamped
//!   availability, always-set cover image)
//! - `User` records generated alongside the catalog
//! - `CatalogSnapshot`, the single JSON document persisted wholesale each run

pub mod error;
pub mod models;
pub mod snapshot;

pub use error::{ModelError, Result};
pub use models::{CatalogRecord, MediaType, Provenance, User, UserRole, UNLIMITED_COPIES};
pub use snapshot::CatalogSnapshot;
