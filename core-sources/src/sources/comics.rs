//! Curated comic issues source
//!
//! Numbered issues of well-known western comic series, genre hints mapping
//! onto the catalog taxonomy. Seeded RNG keeps a given batch reproducible.

use async_trait::async_trait;
use core_model::MediaType;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::candidate::{CandidateSource, IdentifierSpec, RawCandidate};
use crate::error::Result;

/// (genre hint, series titles)
const COMIC_SERIES: &[(&str, &[&str])] = &[
    ("horror supernatural", &["The Walking Dead", "30 Days of Night", "Locke & Key", "Hellblazer"]),
    ("thriller crime", &["Watchmen", "V for Vendetta", "Sin City", "The Killing Joke"]),
    ("romance", &["Archie", "Love and Rockets", "Saga", "Heartstopper"]),
    ("comedy humor", &["Garfield", "Calvin and Hobbes", "Peanuts", "The Far Side"]),
    ("fiction fantasy", &["The Sandman", "Fables", "Y: The Last Man", "Preacher"]),
    ("psychological", &["Swamp Thing", "The Invisibles", "The Maxx", "Black Mirror"]),
    ("classic superhero", &["Superman", "Batman", "Spider-Man", "Wonder Woman"]),
];

/// Curated source of comic issues
pub struct ComicSource {
    issues_per_genre: usize,
    seed: u64,
}

impl ComicSource {
    pub fn new(issues_per_genre: usize, seed: u64) -> Self {
        Self {
            issues_per_genre,
            seed,
        }
    }
}

#[async_trait]
impl CandidateSource for ComicSource {
    fn name(&self) -> &'static str {
        "curated-comics"
    }

    async fn fetch(&self) -> Result<Vec<RawCandidate>> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut candidates = Vec::new();

        for &(hint, series_list) in COMIC_SERIES {
            for _ in 0..self.issues_per_genre {
                let series = series_list[rng.gen_range(0..series_list.len())];
                let issue = rng.gen_range(1..=200);
                let copies = rng.gen_range(3..=15);
                let available = rng.gen_range(0..=copies);

                candidates.push(RawCandidate {
                    title: format!("{} #{}", series, issue),
                    author: "Various Comic Artists".to_string(),
                    external_id: format!("{}-{}", series.to_lowercase().replace(' ', "-"), issue),
                    category_hint: hint.to_string(),
                    media_type: MediaType::Comic,
                    copies,
                    available_copies: available,
                    download_links: None,
                    cover_hint: None,
                    identifier: IdentifierSpec::Comic,
                });
            }
        }

        info!(count = candidates.len(), "Curated comics batch ready");
        Ok(candidates)
    }
}
