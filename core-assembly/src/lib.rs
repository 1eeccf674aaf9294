//! # Catalog Assembly
//!
//! The merge pass that turns source batches into a persisted catalog
//! snapshot: deduplication, id allocation, category classification, cover
//! resolution, and user generation, plus the standalone cover refresh pass
//! that upgrades placeholder covers in an existing snapshot.

pub mod assembler;
pub mod classify;
pub mod error;
pub mod refresh;
pub mod session;
pub mod users;

pub use assembler::{AssemblerConfig, AssemblyReport, CatalogAssembler};
pub use error::{AssemblyError, Result};
pub use refresh::{CoverRefreshJob, RefreshReport};
pub use session::{AssemblySession, DEFAULT_ID_ORIGIN};
pub use users::generate_users;
