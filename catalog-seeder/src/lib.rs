//! Shared wiring for the seeder binaries
//!
//! Both binaries talk to the same snapshot file and build the same cover
//! resolution chain; the source roster is only needed by the full build.

use bridge_http::{HttpClient, ReqwestHttpClient};
use core_covers::providers::{GoogleBooksProvider, OpenLibraryProvider};
use core_covers::{CoverProvider, CoverResolver};
use core_sources::{
    CandidateSource, ComicSource, CuratedClassicsSource, GutendexSource, MagazineSource,
    MangaSource, XkcdSource,
};
use std::sync::Arc;

/// Snapshot document both binaries operate on.
pub const SNAPSHOT_PATH: &str = "library_data.json";

/// How many Gutendex novels to aim for.
const GUTENDEX_TARGET: usize = 120;
const XKCD_STRIPS: u64 = 25;
const MANGA_VOLUMES_PER_GENRE: usize = 5;
const COMIC_ISSUES_PER_GENRE: usize = 5;
const MAGAZINE_ISSUES_PER_TITLE: usize = 6;

/// One seed for all randomized stock counts, so reruns are reproducible.
pub const RUN_SEED: u64 = 20240901;

pub fn build_http_client() -> Arc<dyn HttpClient> {
    Arc::new(ReqwestHttpClient::new())
}

/// The cover chain shared by assembly and refresh: Google Books first,
/// Open Library second.
pub fn build_resolver(http_client: Arc<dyn HttpClient>) -> CoverResolver {
    let providers: Vec<Arc<dyn CoverProvider>> = vec![
        Arc::new(GoogleBooksProvider::new(http_client.clone())),
        Arc::new(OpenLibraryProvider::new(http_client)),
    ];
    CoverResolver::new(providers)
}

/// Source roster in merge order. Novels lead so classic titles win the
/// duplicate race against later curated batches.
pub fn build_sources(http_client: Arc<dyn HttpClient>) -> Vec<Arc<dyn CandidateSource>> {
    vec![
        Arc::new(GutendexSource::new(http_client, GUTENDEX_TARGET, RUN_SEED)),
        Arc::new(CuratedClassicsSource::new()),
        Arc::new(XkcdSource::new(XKCD_STRIPS)),
        Arc::new(MangaSource::new(MANGA_VOLUMES_PER_GENRE, RUN_SEED)),
        Arc::new(ComicSource::new(COMIC_ISSUES_PER_GENRE, RUN_SEED)),
        Arc::new(MagazineSource::new(MAGAZINE_ISSUES_PER_TITLE, RUN_SEED)),
    ]
}

/// Default tracing setup for the binaries.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,catalog_seeder=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
