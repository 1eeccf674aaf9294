//! Curated magazine issues source
//!
//! Fixed magazine mastheads with rolling issue numbers. Magazine subject
//! hints (technology, fashion, ...) sit outside the catalog's genre
//! taxonomy, so these mostly classify to the default label.

use async_trait::async_trait;
use core_model::MediaType;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::candidate::{CandidateSource, IdentifierSpec, RawCandidate};
use crate::error::Result;

/// (masthead, publisher, subject hint)
const MAGAZINES: &[(&str, &str, &str)] = &[
    ("Tech Today", "Digital World Press", "technology news"),
    ("Fashion Forward", "Style Magazine Group", "fashion lifestyle"),
    ("Global News", "World Report Media", "news current affairs"),
    ("Health & Wellness", "Fitness First Publishing", "health fitness"),
    ("Travel & Leisure", "Horizon Media", "travel leisure"),
    ("Entertainment Weekly Review", "Spotlight Press", "entertainment humor"),
    ("Science Digest", "Discovery Press", "science research"),
    ("Sports Arena", "Arena Media", "sports athletics"),
];

/// Curated source of magazine issues
pub struct MagazineSource {
    issues_per_title: usize,
    seed: u64,
}

impl MagazineSource {
    pub fn new(issues_per_title: usize, seed: u64) -> Self {
        Self {
            issues_per_title,
            seed,
        }
    }
}

#[async_trait]
impl CandidateSource for MagazineSource {
    fn name(&self) -> &'static str {
        "curated-magazines"
    }

    async fn fetch(&self) -> Result<Vec<RawCandidate>> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut candidates = Vec::new();

        for &(masthead, publisher, hint) in MAGAZINES {
            for issue in 1..=self.issues_per_title {
                let copies = rng.gen_range(5..=20);

                candidates.push(RawCandidate {
                    title: format!("{} Issue {}", masthead, issue),
                    author: publisher.to_string(),
                    external_id: format!(
                        "{}-{}",
                        masthead.to_lowercase().replace([' ', '&'], "-"),
                        issue
                    ),
                    category_hint: hint.to_string(),
                    media_type: MediaType::Magazine,
                    copies,
                    available_copies: copies,
                    download_links: None,
                    cover_hint: None,
                    identifier: IdentifierSpec::Issn,
                });
            }
        }

        info!(count = candidates.len(), "Curated magazines batch ready");
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_magazine_batch_invariants() {
        let batch = MagazineSource::new(2, 9).fetch().await.unwrap();
        assert_eq!(batch.len(), 2 * MAGAZINES.len());

        for candidate in &batch {
            assert_eq!(candidate.media_type, MediaType::Magazine);
            assert_eq!(candidate.identifier, IdentifierSpec::Issn);
            assert!((5..=20).contains(&candidate.copies));
            assert_eq!(candidate.available_copies, candidate.copies);
        }
    }

    #[tokio::test]
    async fn test_magazine_titles_unique_within_batch() {
        let batch = MagazineSource::new(3, 9).fetch().await.unwrap();
        let mut titles: Vec<_> = batch.iter().map(|c| c.title.clone()).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), batch.len());
    }
}
