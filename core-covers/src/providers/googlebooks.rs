//! Google Books volume search provider
//!
//! First link in the external lookup chain. Searches the volumes endpoint
//! and picks the largest image the volume offers, upgraded to the zoom=2
//! rendition with the page-curl effect stripped.

use crate::error::{CoverError, Result};
use crate::providers::{CoverProvider, CoverQuery, RateLimiter};
use async_trait::async_trait;
use bridge_http::{HttpClient, HttpRequest};
use core_model::MediaType;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, warn};

const GOOGLE_BOOKS_API: &str = "https://www.googleapis.com/books/v1/volumes";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
const MIN_REQUEST_DELAY: Duration = Duration::from_millis(200);

pub struct GoogleBooksProvider {
    http_client: Arc<dyn HttpClient>,
    rate_limiter: Mutex<RateLimiter>,
}

impl GoogleBooksProvider {
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            rate_limiter: Mutex::new(RateLimiter::new(MIN_REQUEST_DELAY)),
        }
    }

    fn search_url(query: &CoverQuery) -> String {
        // Sequential art titles search better with a format qualifier than
        // with the (often collective) author name.
        let terms = match query.media_type {
            MediaType::Comic | MediaType::Manga => {
                format!("{} comic graphic novel", query.title)
            }
            _ => format!("{} {}", query.title, query.author),
        };
        format!(
            "{}?q={}&maxResults=1&printType=books",
            GOOGLE_BOOKS_API,
            urlencoding::encode(&terms)
        )
    }

    /// Largest available rendition wins; thumbnails are the last resort.
    fn pick_image(links: &ImageLinks) -> Option<&String> {
        links
            .extra_large
            .as_ref()
            .or(links.large.as_ref())
            .or(links.medium.as_ref())
            .or(links.small.as_ref())
            .or(links.thumbnail.as_ref())
    }

    fn normalize_url(url: &str) -> String {
        url.replace("zoom=1", "zoom=2").replace("&edge=curl", "")
    }
}

#[async_trait]
impl CoverProvider for GoogleBooksProvider {
    fn name(&self) -> &'static str {
        "google-books"
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
                warn!("Google Books temporarily unavailable");
                return Ok(None);
            }
            status => {
                return Err(CoverError::Http {
                    status,
                    body: response.text().unwrap_or_default(),
                });
            }
        }

        let volumes: VolumesResponse = response
            .json()
            .map_err(|e| CoverError::JsonParse(e.to_string()))?;

        let Some(volume) = volumes.items.first() else {
            debug!(title = %query.title, "No Google Books volume matched");
            return Ok(None);
        };

        Ok(volume
            .volume_info
            .image_links
            .as_ref()
            .and_then(Self::pick_image)
            .map(|url| Self::normalize_url(url)))
    }
}

#[derive(Debug, Deserialize)]
struct VolumesResponse {
    #[serde(default)]
    items: Vec<Volume>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Volume {
    volume_info: VolumeInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeInfo {
    image_links: Option<ImageLinks>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImageLinks {
    extra_large: Option<String>,
    large: Option<String>,
    medium: Option<String>,
    small: Option<String>,
    thumbnail: Option<String>,
}
