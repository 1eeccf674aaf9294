//! Cover resolution chain
//!
//! Order of precedence: curated override, the source's own cover link,
//! external providers in registration order, synthesized placeholder.
//! Resolution is infallible; provider errors demote the record to the next
//! link in the chain rather than failing the record.

use crate::overrides::CuratedCovers;
use crate::placeholder::{is_placeholder, placeholder_url};
use crate::providers::{CoverProvider, CoverQuery};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct CoverResolver {
    overrides: CuratedCovers,
    providers: Vec<Arc<dyn CoverProvider>>,
}

impl CoverResolver {
    pub fn new(providers: Vec<Arc<dyn CoverProvider>>) -> Self {
        Self {
            overrides: CuratedCovers::new(),
            providers,
        }
    }

    /// Resolve a cover URL for the record. Always returns a non-empty URL.
    pub async fn resolve(
        &self,
        query: &CoverQuery,
        source_cover: Option<&str>,
        record_id: u64,
    ) -> String {
        if let Some(url) = self.overrides.lookup(&query.title) {
            debug!(title = %query.title, "Using curated cover override");
            return url.to_string();
        }

        if let Some(hint) = source_cover {
            if !is_placeholder(hint) {
                debug!(title = %query.title, "Using source-provided cover");
                return hint.to_string();
            }
        }

        for provider in &self.providers {
            match provider.resolve(query).await {
                Ok(Some(url)) if !url.is_empty() => {
                    debug!(
                        provider = provider.name(),
                        title = %query.title,
                        "Cover resolved"
                    );
                    return url;
                }
                Ok(_) => {
                    debug!(
                        provider = provider.name(),
                        title = %query.title,
                        "No cover found, trying next provider"
                    );
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        title = %query.title,
                        error = %e,
                        "Cover lookup failed, trying next provider"
                    );
                }
            }
        }

        placeholder_url(query.media_type, record_id)
    }
}
