//! Build (or extend) the library catalog snapshot
//!
//! Loads `library_data.json` when it already exists and merges new source
//! batches into it; otherwise assembles a fresh catalog. The snapshot is
//! rewritten wholesale at the end of the run.

use anyhow::{Context, Result};
use catalog_seeder::{build_http_client, build_resolver, build_sources, init_tracing, SNAPSHOT_PATH};
use core_assembly::{AssemblerConfig, CatalogAssembler};
use core_model::CatalogSnapshot;
use std::path::Path;
use tracing::{info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let http_client = build_http_client();
    if !http_client.is_connected().await {
        warn!("Listing API unreachable, run will rely on curated sources");
    }

    let path = Path::new(SNAPSHOT_PATH);
    let base = if path.exists() {
        let snapshot = CatalogSnapshot::load(path)
            .await
            .context("existing snapshot is unreadable")?;
        info!(
            books = snapshot.books.len(),
            users = snapshot.users.len(),
            "Extending existing snapshot"
        );
        Some(snapshot)
    } else {
        info!("No existing snapshot, assembling from scratch");
        None
    };

    let assembler = CatalogAssembler::new(
        build_sources(http_client.clone()),
        build_resolver(http_client),
        AssemblerConfig::default(),
    );

    let report = assembler
        .run(base, path)
        .await
        .context("catalog assembly failed")?;

    info!(
        accepted = report.accepted,
        duplicates = report.rejected_duplicates,
        placeholders = report.placeholder_covers,
        "Catalog build finished"
    );
    for (category, count) in &report.by_category {
        info!(category = category.as_str(), count, "Category total");
    }
    if !report.failed_sources.is_empty() {
        warn!(sources = ?report.failed_sources, "Some sources were unavailable");
    }

    Ok(())
}
