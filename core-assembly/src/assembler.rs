//! The catalog merge pass
//!
//! Drains each source in declared order, admits candidates through the
//! session (dedup + id allocation), classifies, renders identifiers,
//! resolves covers, and persists the whole snapshot once at the end.
//! A failed source skips its batch; a failed persist fails the run.

use crate::classify;
use crate::error::Result;
use crate::session::AssemblySession;
use crate::users::generate_users;
use core_covers::{is_placeholder, CoverQuery, CoverResolver};
use core_model::{CatalogRecord, CatalogSnapshot, Provenance};
use core_sources::CandidateSource;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct AssemblerConfig {
    /// Pause between records, to stay polite to the cover APIs.
    pub inter_record_delay: Duration,
    /// Records per progress chunk.
    pub chunk_size: usize,
    /// Longer pause after each chunk.
    pub chunk_pause: Duration,
    /// Users generated when the base snapshot has none.
    pub user_count: usize,
    pub user_seed: u64,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            inter_record_delay: Duration::from_millis(200),
            chunk_size: 10,
            chunk_pause: Duration::from_secs(1),
            user_count: 50,
            user_seed: 2001,
        }
    }
}

/// What one merge pass did, for the run summary.
#[derive(Debug, Default)]
pub struct AssemblyReport {
    pub accepted: usize,
    pub rejected_duplicates: usize,
    pub placeholder_covers: usize,
    /// Sources whose whole batch was unavailable.
    pub failed_sources: Vec<String>,
    pub by_media_type: BTreeMap<String, usize>,
    pub by_category: BTreeMap<String, usize>,
}

pub struct CatalogAssembler {
    sources: Vec<Arc<dyn CandidateSource>>,
    resolver: CoverResolver,
    config: AssemblerConfig,
}

impl CatalogAssembler {
    pub fn new(
        sources: Vec<Arc<dyn CandidateSource>>,
        resolver: CoverResolver,
        config: AssemblerConfig,
    ) -> Self {
        Self {
            sources,
            resolver,
            config,
        }
    }

    /// Run the merge pass and persist the result to `output`.
    ///
    /// When `base` is given, its records are kept, its titles block
    /// duplicates, and ids continue above its maximum. Its users are kept
    /// as-is; a fresh roster is generated only when the base has none.
    ///
    /// # Errors
    /// Only snapshot persistence fails the run. Source and cover failures
    /// are absorbed and reported.
    pub async fn run(
        &self,
        base: Option<CatalogSnapshot>,
        output: &Path,
    ) -> Result<AssemblyReport> {
        let mut session = match &base {
            Some(snapshot) => AssemblySession::from_snapshot(snapshot),
            None => AssemblySession::new(crate::session::DEFAULT_ID_ORIGIN),
        };
        let mut snapshot = base.unwrap_or_default();
        let mut report = AssemblyReport::default();

        for source in &self.sources {
            let batch = match source.fetch().await {
                Ok(batch) => batch,
                Err(e) => {
                    warn!(
                        source = source.name(),
                        error = %e,
                        "Source unavailable, skipping its batch"
                    );
                    report.failed_sources.push(source.name().to_string());
                    continue;
                }
            };
            info!(
                source = source.name(),
                candidates = batch.len(),
                "Merging source batch"
            );

            for candidate in batch {
                if !session.accept_title(&candidate.title) {
                    debug!(title = %candidate.title, "Duplicate title rejected");
                    report.rejected_duplicates += 1;
                    continue;
                }

                let id = session.allocate_id();
                let category = classify::category_label(candidate.media_type, &candidate.category_hint);
                let query = CoverQuery {
                    title: candidate.title.clone(),
                    author: candidate.author.clone(),
                    media_type: candidate.media_type,
                    isbn: None,
                };
                let cover_image = self
                    .resolver
                    .resolve(&query, candidate.cover_hint.as_deref(), id)
                    .await;
                if is_placeholder(&cover_image) {
                    report.placeholder_covers += 1;
                }

                let record = CatalogRecord {
                    id,
                    identifier: candidate.identifier.format(id),
                    title: candidate.title,
                    author: candidate.author,
                    category: category.clone(),
                    media_type: candidate.media_type,
                    copies: candidate.copies,
                    available_copies: candidate.available_copies,
                    cover_image,
                    download_links: candidate.download_links,
                    provenance: Provenance {
                        source: source.name().to_string(),
                        source_id: candidate.external_id,
                    },
                };

                *report
                    .by_media_type
                    .entry(record.media_type.to_string())
                    .or_default() += 1;
                *report.by_category.entry(category).or_default() += 1;
                report.accepted += 1;
                snapshot.books.push(record);

                if report.accepted % self.config.chunk_size == 0 {
                    info!(
                        accepted = report.accepted,
                        total = snapshot.books.len(),
                        "Progress"
                    );
                    tokio::time::sleep(self.config.chunk_pause).await;
                } else {
                    tokio::time::sleep(self.config.inter_record_delay).await;
                }
            }
        }

        if snapshot.users.is_empty() {
            snapshot.users = generate_users(self.config.user_count, self.config.user_seed);
            info!(users = snapshot.users.len(), "Generated user roster");
        }

        snapshot.save(output).await?;

        info!(
            accepted = report.accepted,
            duplicates = report.rejected_duplicates,
            placeholders = report.placeholder_covers,
            failed_sources = report.failed_sources.len(),
            "Merge pass complete"
        );
        Ok(report)
    }
}
