//! Persisted catalog snapshot
//!
//! The snapshot is a single JSON document (`books` + `users`) written
//! wholesale at the end of a run. There is no versioning and no partial
//! update; a later run either extends a loaded snapshot or starts fresh.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{ModelError, Result};
use crate::models::{CatalogRecord, User};

/// The entire catalog and user list at one point in time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub books: Vec<CatalogRecord>,
    pub users: Vec<User>,
}

impl CatalogSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest record id currently in the snapshot, or 0 when empty
    ///
    /// The ID allocator must be seeded from this value plus one before any
    /// allocation when extending a prior snapshot; skipping that step
    /// silently collides ids across merged batches.
    pub fn max_record_id(&self) -> u64 {
        self.books.iter().map(|b| b.id).max().unwrap_or(0)
    }

    /// Load a snapshot from a JSON document on disk
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading catalog snapshot");

        let raw = tokio::fs::read(path)
            .await
            .map_err(|source| ModelError::SnapshotRead {
                path: path.display().to_string(),
                source,
            })?;

        let snapshot: CatalogSnapshot = serde_json::from_slice(&raw)?;
        info!(
            books = snapshot.books.len(),
            users = snapshot.users.len(),
            "Loaded catalog snapshot"
        );
        Ok(snapshot)
    }

    /// Persist the snapshot wholesale
    ///
    /// # Errors
    /// A write failure here is fatal to the run: all assembled work would
    /// otherwise be silently lost.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let raw = serde_json::to_vec_pretty(self)?;

        tokio::fs::write(path, raw)
            .await
            .map_err(|source| ModelError::SnapshotWrite {
                path: path.display().to_string(),
                source,
            })?;

        info!(
            path = %path.display(),
            books = self.books.len(),
            users = self.users.len(),
            "Persisted catalog snapshot"
        );
        Ok(())
    }
}
