//! Upgrade placeholder covers in an existing snapshot
//!
//! Standalone pass over `library_data.json`: records already carrying a
//! real cover are untouched, placeholder records get another trip through
//! the resolution chain. Safe to re-run; it converges once every cover
//! that can resolve has resolved.

use anyhow::{Context, Result};
use catalog_seeder::{build_http_client, build_resolver, init_tracing, SNAPSHOT_PATH};
use core_assembly::CoverRefreshJob;
use std::path::Path;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let job = CoverRefreshJob::new(build_resolver(build_http_client()));
    let report = job
        .run(Path::new(SNAPSHOT_PATH))
        .await
        .context("cover refresh failed")?;

    info!(
        total = report.total,
        updated = report.updated,
        skipped = report.skipped,
        unresolved = report.unresolved,
        "Cover refresh finished"
    );
    Ok(())
}
