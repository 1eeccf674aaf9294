//! Project Gutenberg listing source (Gutendex API)
//!
//! ## API Endpoint
//!
//! - **Listing**: `https://gutendex.com/books?page={n}`, paginated; returns
//!   title/authors/subjects/format-links per item.
//!
//! ## Rate Limiting
//!
//! Gutendex is a free community mirror; a fixed delay is kept between page
//! requests, and a failed page is skipped after logging rather than retried.

use async_trait::async_trait;
use bridge_http::{HttpClient, HttpMethod, HttpRequest};
use core_model::MediaType;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::candidate::{
    author_or_fallback, title_or_fallback, CandidateSource, IdentifierSpec, RawCandidate,
};
use crate::error::Result;

/// Gutendex listing base URL
const GUTENDEX_API_BASE: &str = "https://gutendex.com/books";

/// Timeout for listing requests
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fixed delay between successive page requests
const PAGE_DELAY: Duration = Duration::from_millis(500);

/// Upper bound on page fetches (successful or not) per run
const MAX_PAGE_ATTEMPTS: u32 = 50;

/// Items with more downloads than this get the larger copy range
const POPULAR_DOWNLOAD_COUNT: u64 = 1000;

/// Paginated listing source for Project Gutenberg novels
pub struct GutendexSource {
    http_client: Arc<dyn HttpClient>,
    target_count: usize,
    seed: u64,
}

#[derive(Debug, Deserialize)]
struct ListingPage {
    #[serde(default)]
    results: Vec<ListingItem>,
    #[serde(default)]
    next: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListingItem {
    id: u64,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    authors: Vec<ListingAuthor>,
    #[serde(default)]
    subjects: Vec<String>,
    #[serde(default)]
    formats: BTreeMap<String, String>,
    #[serde(default)]
    download_count: u64,
}

#[derive(Debug, Deserialize)]
struct ListingAuthor {
    #[serde(default)]
    name: Option<String>,
}

impl GutendexSource {
    /// Creates a new Gutendex source
    ///
    /// # Arguments
    ///
    /// * `http_client` - HTTP client for listing requests
    /// * `target_count` - How many novel candidates to collect
    /// * `seed` - RNG seed for copy counts (fixed in the invoking job)
    pub fn new(http_client: Arc<dyn HttpClient>, target_count: usize, seed: u64) -> Self {
        Self {
            http_client,
            target_count,
            seed,
        }
    }

    fn normalize(item: ListingItem, rng: &mut StdRng) -> RawCandidate {
        let title = title_or_fallback(item.title.as_deref());
        let author = author_or_fallback(
            item.authors
                .first()
                .and_then(|a| a.name.as_deref()),
        );
        let category_hint = item.subjects.join(" ");

        let mut download_links = BTreeMap::new();
        for (format, key) in [
            ("application/epub+zip", "epub"),
            ("application/pdf", "pdf"),
            ("text/plain; charset=utf-8", "text"),
        ] {
            if let Some(url) = item.formats.get(format) {
                if !url.is_empty() {
                    download_links.insert(key.to_string(), url.clone());
                }
            }
        }

        let cover_hint = item
            .formats
            .get("image/jpeg")
            .filter(|url| !url.is_empty())
            .cloned();

        // Popular titles are stocked deeper than rare ones
        let copies = if item.download_count > POPULAR_DOWNLOAD_COUNT {
            rng.gen_range(3..=10)
        } else {
            rng.gen_range(1..=5)
        };

        RawCandidate {
            title,
            author,
            external_id: item.id.to_string(),
            category_hint,
            media_type: MediaType::Novel,
            copies,
            available_copies: copies,
            download_links: (!download_links.is_empty()).then_some(download_links),
            cover_hint,
            identifier: IdentifierSpec::Gutenberg(item.id),
        }
    }
}

#[async_trait]
impl CandidateSource for GutendexSource {
    fn name(&self) -> &'static str {
        "gutendex"
    }

    async fn fetch(&self) -> Result<Vec<RawCandidate>> {
        let mut candidates = Vec::with_capacity(self.target_count);
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut page = 1u32;
        let mut attempts = 0u32;

        info!(target = self.target_count, "Fetching novels from Gutendex");

        while candidates.len() < self.target_count && attempts < MAX_PAGE_ATTEMPTS {
            let url = format!("{}?page={}", GUTENDEX_API_BASE, page);
            debug!(%url, "Fetching listing page");

            let request = HttpRequest::new(HttpMethod::Get, url)
                .header("Accept", "application/json")
                .timeout(REQUEST_TIMEOUT);

            attempts += 1;

            let listing: Option<ListingPage> = match self.http_client.execute(request).await {
                Ok(response) if response.is_success() => match response.json() {
                    Ok(listing) => Some(listing),
                    Err(e) => {
                        warn!(page, error = %e, "Failed to parse listing page, skipping");
                        None
                    }
                },
                Ok(response) => {
                    warn!(page, status = response.status, "Listing page unavailable, skipping");
                    None
                }
                Err(e) => {
                    warn!(page, error = %e, "Listing request failed, skipping page");
                    None
                }
            };

            if let Some(listing) = listing {
                let last_page = listing.next.is_none();

                for item in listing.results {
                    if candidates.len() >= self.target_count {
                        break;
                    }
                    candidates.push(Self::normalize(item, &mut rng));
                }

                if candidates.len() % 50 == 0 && !candidates.is_empty() {
                    debug!(fetched = candidates.len(), "Listing progress");
                }

                if last_page {
                    break;
                }
            }

            page += 1;
            sleep(PAGE_DELAY).await;
        }

        info!(fetched = candidates.len(), "Gutendex listing complete");
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(json: serde_json::Value) -> ListingItem {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_normalize_full_item() {
        let mut rng = StdRng::seed_from_u64(7);
        let candidate = GutendexSource::normalize(
            item(serde_json::json!({
                "id": 2701,
                "title": "Moby Dick; Or, The Whale",
                "authors": [{"name": "Melville, Herman"}],
                "subjects": ["Whaling -- Fiction", "Sea stories"],
                "formats": {
                    "application/epub+zip": "https://www.gutenberg.org/ebooks/2701.epub.images",
                    "image/jpeg": "https://www.gutenberg.org/cache/epub/2701/pg2701.cover.medium.jpg",
                    "text/plain; charset=utf-8": "https://www.gutenberg.org/files/2701/2701-0.txt"
                },
                "download_count": 50000
            })),
            &mut rng,
        );

        assert_eq!(candidate.title, "Moby Dick; Or, The Whale");
        assert_eq!(candidate.author, "Melville, Herman");
        assert_eq!(candidate.external_id, "2701");
        assert!(candidate.category_hint.contains("Fiction"));
        assert_eq!(candidate.identifier, IdentifierSpec::Gutenberg(2701));
        assert_eq!(candidate.identifier.format(0), "PG-002701");
        // Popular title gets the deeper stock range
        assert!((3..=10).contains(&candidate.copies));
        assert_eq!(candidate.available_copies, candidate.copies);

        let links = candidate.download_links.unwrap();
        assert!(links.contains_key("epub"));
        assert!(links.contains_key("text"));
        assert!(!links.contains_key("pdf"));
        assert_eq!(
            candidate.cover_hint.as_deref(),
            Some("https://www.gutenberg.org/cache/epub/2701/pg2701.cover.medium.jpg")
        );
    }

    #[test]
    fn test_normalize_substitutes_missing_fields() {
        let mut rng = StdRng::seed_from_u64(7);
        let candidate = GutendexSource::normalize(
            item(serde_json::json!({"id": 99, "authors": []})),
            &mut rng,
        );

        assert_eq!(candidate.title, crate::candidate::FALLBACK_TITLE);
        assert_eq!(candidate.author, crate::candidate::FALLBACK_AUTHOR);
        assert!(candidate.download_links.is_none());
        assert!(candidate.cover_hint.is_none());
        assert!((1..=5).contains(&candidate.copies));
    }

    #[test]
    fn test_normalize_is_deterministic_for_a_seed() {
        let make = || {
            let mut rng = StdRng::seed_from_u64(42);
            GutendexSource::normalize(
                item(serde_json::json!({"id": 1, "title": "A", "download_count": 5})),
                &mut rng,
            )
        };
        assert_eq!(make().copies, make().copies);
    }
}
