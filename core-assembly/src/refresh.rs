//! Cover refresh pass
//!
//! Walks an existing snapshot and retries cover resolution for records
//! still showing a placeholder. Records with a real cover are left alone,
//! so re-running the pass converges instead of churning. A record is only
//! rewritten when resolution produced something better than another
//! placeholder.

use crate::error::Result;
use core_covers::{is_placeholder, CoverQuery, CoverResolver};
use core_model::CatalogSnapshot;
use std::path::Path;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RefreshReport {
    pub total: usize,
    pub updated: usize,
    /// Records already carrying a real cover.
    pub skipped: usize,
    /// Placeholder records the chain could not improve.
    pub unresolved: usize,
}

pub struct CoverRefreshJob {
    resolver: CoverResolver,
    inter_record_delay: Duration,
}

impl CoverRefreshJob {
    pub fn new(resolver: CoverResolver) -> Self {
        Self {
            resolver,
            inter_record_delay: Duration::from_millis(200),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.inter_record_delay = delay;
        self
    }

    /// Load the snapshot at `path`, refresh placeholder covers in place,
    /// and persist it back.
    pub async fn run(&self, path: &Path) -> Result<RefreshReport> {
        let mut snapshot = CatalogSnapshot::load(path).await?;
        let mut report = RefreshReport {
            total: snapshot.books.len(),
            ..RefreshReport::default()
        };

        for record in &mut snapshot.books {
            if !is_placeholder(&record.cover_image) {
                report.skipped += 1;
                continue;
            }

            let query = CoverQuery {
                title: record.title.clone(),
                author: record.author.clone(),
                media_type: record.media_type,
                isbn: None,
            };
            let resolved = self.resolver.resolve(&query, None, record.id).await;

            if is_placeholder(&resolved) {
                debug!(id = record.id, title = %record.title, "Still unresolved");
                report.unresolved += 1;
            } else {
                info!(id = record.id, title = %record.title, "Cover upgraded");
                record.cover_image = resolved;
                report.updated += 1;
            }

            sleep(self.inter_record_delay).await;
        }

        snapshot.save(path).await?;
        info!(
            total = report.total,
            updated = report.updated,
            skipped = report.skipped,
            unresolved = report.unresolved,
            "Cover refresh complete"
        );
        Ok(report)
    }
}
