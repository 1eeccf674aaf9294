//! Curated manga volumes source
//!
//! Emits numbered volumes of well-known manga series, spread across the
//! catalog taxonomy via each series' genre hint. Volume numbers are drawn
//! from a seeded RNG, so a given seed always yields the same batch; repeated
//! titles are left for the deduplicator to reject.

use async_trait::async_trait;
use core_model::MediaType;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::candidate::{CandidateSource, IdentifierSpec, RawCandidate};
use crate::error::Result;

/// (genre hint, series titles)
const MANGA_SERIES: &[(&str, &[&str])] = &[
    ("horror supernatural", &["Tokyo Ghoul", "Another", "Parasyte", "Deadman Wonderland"]),
    ("thriller suspense", &["Death Note", "Psycho-Pass", "Erased", "The Promised Neverland"]),
    ("romance", &["Your Lie in April", "Kimi ni Todoke", "Horimiya", "Fruits Basket"]),
    ("comedy humor", &["One Punch Man", "Gintama", "Nichijou", "Kaguya-sama"]),
    ("fiction adventure", &["Fullmetal Alchemist", "Attack on Titan", "My Hero Academia", "Demon Slayer"]),
    ("psychological", &["Monster", "Oyasumi Punpun", "Homunculus", "Liar Game"]),
    ("classic", &["Akira", "Dragon Ball", "Sailor Moon", "Astro Boy"]),
];

/// Curated source of manga volumes
pub struct MangaSource {
    volumes_per_genre: usize,
    seed: u64,
}

impl MangaSource {
    pub fn new(volumes_per_genre: usize, seed: u64) -> Self {
        Self {
            volumes_per_genre,
            seed,
        }
    }
}

#[async_trait]
impl CandidateSource for MangaSource {
    fn name(&self) -> &'static str {
        "curated-manga"
    }

    async fn fetch(&self) -> Result<Vec<RawCandidate>> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut candidates = Vec::new();

        for &(hint, series_list) in MANGA_SERIES {
            for _ in 0..self.volumes_per_genre {
                let series = series_list[rng.gen_range(0..series_list.len())];
                let volume = rng.gen_range(1..=50);
                let copies = rng.gen_range(5..=20);
                // Availability must never exceed stock
                let available = rng.gen_range(3..=20).min(copies);

                candidates.push(RawCandidate {
                    title: format!("{} Vol. {}", series, volume),
                    author: "Various Manga Artists".to_string(),
                    external_id: format!("{}-vol-{}", series.to_lowercase().replace(' ', "-"), volume),
                    category_hint: hint.to_string(),
                    media_type: MediaType::Manga,
                    copies,
                    available_copies: available,
                    download_links: None,
                    cover_hint: None,
                    identifier: IdentifierSpec::Manga,
                });
            }
        }

        info!(count = candidates.len(), "Curated manga batch ready");
        Ok(candidates)
    }
}
