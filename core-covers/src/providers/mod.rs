//! External cover lookup providers
//!
//! Each provider answers the same question: given a record's title, author,
//! and media type, is there a real cover image URL for it? Providers return
//! `Ok(None)` when the service answered but had nothing usable, and an error
//! when the service could not be asked at all. The resolver treats both the
//! same way and advances down the chain.

pub mod googlebooks;
pub mod openlibrary;

use crate::error::Result;
use async_trait::async_trait;
use core_model::MediaType;
use std::time::{Duration, Instant};

pub use googlebooks::GoogleBooksProvider;
pub use openlibrary::OpenLibraryProvider;

/// What a provider needs to know about the record it is searching for.
#[derive(Debug, Clone)]
pub struct CoverQuery {
    pub title: String,
    pub author: String,
    pub media_type: MediaType,
    /// Real-world ISBN, when the source supplied one. Synthetic catalog
    /// identifiers must not be passed here.
    pub isbn: Option<String>,
}

#[async_trait]
pub trait CoverProvider: Send + Sync {
    /// Provider name used in log output.
    fn name(&self) -> &'static str;

    /// Look up a cover URL for the given record.
    async fn resolve(&self, query: &CoverQuery) -> Result<Option<String>>;
}

/// Simple rate limiter enforcing a minimum delay between requests.
pub(crate) struct RateLimiter {
    last_request: Option<Instant>,
    min_delay: Duration,
}

impl RateLimiter {
    pub(crate) fn new(min_delay: Duration) -> Self {
        Self {
            last_request: None,
            min_delay,
        }
    }

    pub(crate) async fn wait_if_needed(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_delay {
                tokio::time::sleep(self.min_delay - elapsed).await;
            }
        }
        self.last_request = Some(Instant::now());
    }
}
