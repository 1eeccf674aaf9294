//! Integration tests for the cover resolution chain
//!
//! Providers are mocked to pin down precedence: curated override first,
//! then the source cover, then each provider in order, then the
//! placeholder.

use async_trait::async_trait;
use core_covers::{
    is_placeholder, CoverError, CoverProvider, CoverQuery, CoverResolver,
};
use core_model::MediaType;
use mockall::mock;
use std::sync::Arc;

mock! {
    Provider {}

    #[async_trait]
    impl CoverProvider for Provider {
        fn name(&self) -> &'static str;
        async fn resolve(&self, query: &CoverQuery) -> core_covers::Result<Option<String>>;
    }
}

fn novel_query(title: &str) -> CoverQuery {
    CoverQuery {
        title: title.to_string(),
        author: "Test Author".to_string(),
        media_type: MediaType::Novel,
        isbn: None,
    }
}

fn provider_returning(url: Option<&str>) -> MockProvider {
    let url = url.map(str::to_string);
    let mut provider = MockProvider::new();
    provider.expect_name().return_const("mock");
    provider
        .expect_resolve()
        .returning(move |_| Ok(url.clone()));
    provider
}

fn failing_provider() -> MockProvider {
    let mut provider = MockProvider::new();
    provider.expect_name().return_const("mock");
    provider
        .expect_resolve()
        .returning(|_| Err(CoverError::Network("connection refused".to_string())));
    provider
}

#[tokio::test]
async fn curated_override_wins_over_everything() {
    let mut provider = MockProvider::new();
    provider.expect_name().return_const("mock");
    provider.expect_resolve().times(0);

    let resolver = CoverResolver::new(vec![Arc::new(provider)]);
    let query = CoverQuery {
        title: "Watchmen #5".to_string(),
        author: "Alan Moore".to_string(),
        media_type: MediaType::Comic,
        isbn: None,
    };
    let url = resolver
        .resolve(&query, Some("https://example.com/source.jpg"), 1001)
        .await;
    assert!(url.contains("media-amazon.com"));
}

#[tokio::test]
async fn source_cover_skips_providers() {
    let mut provider = MockProvider::new();
    provider.expect_name().return_const("mock");
    provider.expect_resolve().times(0);

    let resolver = CoverResolver::new(vec![Arc::new(provider)]);
    let url = resolver
        .resolve(
            &novel_query("Pride and Prejudice"),
            Some("https://www.gutenberg.org/cache/epub/1342/pg1342.cover.medium.jpg"),
            1001,
        )
        .await;
    assert_eq!(
        url,
        "https://www.gutenberg.org/cache/epub/1342/pg1342.cover.medium.jpg"
    );
}

#[tokio::test]
async fn placeholder_source_cover_is_ignored() {
    let provider = provider_returning(Some("https://real.example/cover.jpg"));
    let resolver = CoverResolver::new(vec![Arc::new(provider)]);
    let url = resolver
        .resolve(
            &novel_query("Some Novel"),
            Some("https://via.placeholder.com/400x600"),
            1001,
        )
        .await;
    assert_eq!(url, "https://real.example/cover.jpg");
}

#[tokio::test]
async fn first_provider_with_a_result_wins() {
    let first = provider_returning(Some("https://first.example/cover.jpg"));
    let mut second = MockProvider::new();
    second.expect_name().return_const("second");
    second.expect_resolve().times(0);

    let resolver = CoverResolver::new(vec![Arc::new(first), Arc::new(second)]);
    let url = resolver.resolve(&novel_query("Some Novel"), None, 1001).await;
    assert_eq!(url, "https://first.example/cover.jpg");
}

#[tokio::test]
async fn empty_first_provider_falls_through_to_second() {
    let first = provider_returning(None);
    let second = provider_returning(Some("https://second.example/cover.jpg"));

    let resolver = CoverResolver::new(vec![Arc::new(first), Arc::new(second)]);
    let url = resolver.resolve(&novel_query("Some Novel"), None, 1001).await;
    assert_eq!(url, "https://second.example/cover.jpg");
}

#[tokio::test]
async fn failing_provider_falls_through_to_second() {
    let first = failing_provider();
    let second = provider_returning(Some("https://second.example/cover.jpg"));

    let resolver = CoverResolver::new(vec![Arc::new(first), Arc::new(second)]);
    let url = resolver.resolve(&novel_query("Some Novel"), None, 1001).await;
    assert_eq!(url, "https://second.example/cover.jpg");
}

#[tokio::test]
async fn exhausted_chain_yields_placeholder() {
    let first = failing_provider();
    let second = provider_returning(None);

    let resolver = CoverResolver::new(vec![Arc::new(first), Arc::new(second)]);
    let url = resolver.resolve(&novel_query("Some Novel"), None, 1042).await;
    assert!(is_placeholder(&url));
    assert!(url.contains("novel-1042"));
}

#[tokio::test]
async fn empty_chain_yields_placeholder() {
    let resolver = CoverResolver::new(vec![]);
    let url = resolver.resolve(&novel_query("Some Novel"), None, 1001).await;
    assert!(is_placeholder(&url));
}
