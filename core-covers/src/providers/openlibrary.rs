//! Open Library search provider
//!
//! Second link in the external lookup chain. Searches by title and author,
//! then builds a covers.openlibrary.org URL from the first document's cover
//! id, falling back to an ISBN-addressed cover when one is known.

use crate::error::{CoverError, Result};
use crate::providers::{CoverProvider, CoverQuery, RateLimiter};
use async_trait::async_trait;
use bridge_http::{HttpClient, HttpRequest};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, warn};

const OPEN_LIBRARY_SEARCH: &str = "https://openlibrary.org/search.json";
const OPEN_LIBRARY_COVERS: &str = "https://covers.openlibrary.org/b";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
const MIN_REQUEST_DELAY: Duration = Duration::from_millis(500);

pub struct OpenLibraryProvider {
    http_client: Arc<dyn HttpClient>,
    rate_limiter: Mutex<RateLimiter>,
}

impl OpenLibraryProvider {
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            rate_limiter: Mutex::new(RateLimiter::new(MIN_REQUEST_DELAY)),
        }
    }

    fn search_url(query: &CoverQuery) -> String {
        format!(
            "{}?title={}&author={}&limit=1",
            OPEN_LIBRARY_SEARCH,
            urlencoding::encode(&query.title),
            urlencoding::encode(&query.author)
        )
    }

    fn cover_from_doc(doc: &SearchDoc, query: &CoverQuery) -> Option<String> {
        if let Some(cover_id) = doc.cover_i {
            return Some(format!("{}/id/{}-L.jpg", OPEN_LIBRARY_COVERS, cover_id));
        }
        doc.isbn
            .as_ref()
            .and_then(|isbns| isbns.first())
            .map(String::as_str)
            .or(query.isbn.as_deref())
            .map(|isbn| format!("{}/isbn/{}-L.jpg", OPEN_LIBRARY_COVERS, isbn))
    }
}

#[async_trait]
impl CoverProvider for OpenLibraryProvider {
    fn name(&self) -> &'static str {
        "open-library"
    }

    async fn resolve(&self, query: &CoverQuery) -> Result<Option<String>> {
        self.rate_limiter.lock().await.wait_if_needed().await;

        let request = HttpRequest::get(Self::search_url(query)).timeout(REQUEST_TIMEOUT);
        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| CoverError::Network(e.to_string()))?;

        match response.status {
            200 => {}
            429 => {
                let retry_after = response
                    .headers
                    .get("retry-after")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60);
                return Err(CoverError::RateLimited {
                    provider: self.name().to_string(),
                    retry_after_seconds: retry_after,
                });
            }
            503 => {
                warn!("Open Library temporarily unavailable");
                return Ok(None);
            }
            status => {
                return Err(CoverError::Http {
                    status,
                    body: response.text().unwrap_or_default(),
                });
            }
        }

        let results: SearchResponse = response
            .json()
            .map_err(|e| CoverError::JsonParse(e.to_string()))?;

        let Some(doc) = results.docs.first() else {
            debug!(title = %query.title, "No Open Library document matched");
            return Ok(None);
        };

        Ok(Self::cover_from_doc(doc, query))
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    docs: Vec<SearchDoc>,
}

#[derive(Debug, Deserialize)]
struct SearchDoc {
    cover_i: Option<u64>,
    isbn: Option<Vec<String>>,
}
