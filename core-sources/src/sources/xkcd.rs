//! xkcd webcomic source
//!
//! Derived entries for the first N xkcd strips. Purely digital, so stock is
//! the unlimited sentinel rather than a physical copy count.

use async_trait::async_trait;
use core_model::{MediaType, UNLIMITED_COPIES};
use std::collections::BTreeMap;
use tracing::info;

use crate::candidate::{CandidateSource, IdentifierSpec, RawCandidate};
use crate::error::Result;

/// Derived source for xkcd strips
pub struct XkcdSource {
    count: u64,
}

impl XkcdSource {
    /// `count` - how many strips to emit, starting from #1
    pub fn new(count: u64) -> Self {
        Self { count }
    }
}

#[async_trait]
impl CandidateSource for XkcdSource {
    fn name(&self) -> &'static str {
        "xkcd"
    }

    async fn fetch(&self) -> Result<Vec<RawCandidate>> {
        let candidates = (1..=self.count)
            .map(|strip| {
                let mut links = BTreeMap::new();
                links.insert("web".to_string(), format!("https://xkcd.com/{}/", strip));

                // Per-strip image URLs are only discoverable through the
                // strip's own JSON endpoint, so no cover hint; covers come
                // from the resolver chain.
                RawCandidate {
                    title: format!("xkcd #{}", strip),
                    author: "Randall Munroe".to_string(),
                    external_id: strip.to_string(),
                    category_hint: "webcomic humor satire".to_string(),
                    media_type: MediaType::Comic,
                    copies: UNLIMITED_COPIES,
                    available_copies: UNLIMITED_COPIES,
                    download_links: Some(links),
                    cover_hint: None,
                    identifier: IdentifierSpec::Xkcd(strip),
                }
            })
            .collect::<Vec<_>>();

        info!(count = candidates.len(), "xkcd batch ready");
        Ok(candidates)
    }
}
