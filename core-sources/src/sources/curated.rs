//! Curated famous-books source
//!
//! A fixed table of well-known public-domain novels with their Project
//! Gutenberg numbers. These carry `ISBN-%04d` identifiers rendered from the
//! allocated record id, and a Gutenberg cache cover hint.

use async_trait::async_trait;
use core_model::MediaType;
use std::collections::BTreeMap;
use tracing::info;

use crate::candidate::{CandidateSource, IdentifierSpec, RawCandidate};
use crate::error::Result;

/// (title, author, gutenberg number, category hint)
const CURATED_CLASSICS: &[(&str, &str, u64, &str)] = &[
    ("The Count of Monte Cristo", "Dumas, Alexandre", 1184, "adventure fiction"),
    ("The Three Musketeers", "Dumas, Alexandre", 1257, "adventure fiction"),
    ("Twenty Thousand Leagues Under the Sea", "Verne, Jules", 164, "science fiction"),
    ("Around the World in Eighty Days", "Verne, Jules", 103, "adventure fiction"),
    ("Les Misérables", "Hugo, Victor", 135, "classic literature"),
    ("The Hunchback of Notre Dame", "Hugo, Victor", 2610, "classic literature"),
    ("Crime and Punishment", "Dostoevsky, Fyodor", 2554, "psychological fiction"),
    ("The Brothers Karamazov", "Dostoevsky, Fyodor", 28054, "psychological fiction"),
    ("Anna Karenina", "Tolstoy, Leo", 1399, "classic literature"),
    ("War and Peace", "Tolstoy, Leo", 2600, "historical fiction"),
    ("The Idiot", "Dostoevsky, Fyodor", 2638, "psychological fiction"),
    ("Don Quixote", "Cervantes, Miguel de", 996, "classic satire"),
    ("The Odyssey", "Homer", 1727, "classic literature"),
    ("The Iliad", "Homer", 6130, "classic literature"),
    ("Candide", "Voltaire", 19942, "satire humor"),
    ("Robinson Crusoe", "Defoe, Daniel", 521, "adventure fiction"),
    ("Gulliver's Travels", "Swift, Jonathan", 829, "satire fantasy"),
    ("The Scarlet Letter", "Hawthorne, Nathaniel", 25, "classic literature"),
    ("Moby Dick", "Melville, Herman", 2701, "adventure fiction"),
    ("The Adventures of Tom Sawyer", "Twain, Mark", 74, "adventure humor"),
    ("The Age of Innocence", "Wharton, Edith", 541, "romance fiction"),
    ("Treasure Island", "Stevenson, Robert Louis", 120, "adventure fiction"),
    ("The Strange Case of Dr. Jekyll and Mr. Hyde", "Stevenson, Robert Louis", 43, "horror gothic"),
    ("Tess of the d'Urbervilles", "Hardy, Thomas", 110, "classic literature"),
    ("Ivanhoe", "Scott, Walter", 82, "historical fiction"),
    ("The Woman in White", "Collins, Wilkie", 583, "mystery suspense"),
    ("The Moonstone", "Collins, Wilkie", 155, "mystery detective"),
    ("The Time Machine", "Wells, H. G.", 35, "science fiction"),
    ("The Invisible Man", "Wells, H. G.", 5230, "science fiction"),
    ("The Island of Doctor Moreau", "Wells, H. G.", 159, "science fiction horror"),
    ("A Princess of Mars", "Burroughs, Edgar Rice", 62, "science fiction"),
    ("The Lost World", "Doyle, Arthur Conan", 139, "science fiction adventure"),
    ("The King in Yellow", "Chambers, Robert W.", 8492, "horror supernatural"),
    ("The House on the Borderland", "Hodgson, William Hope", 10002, "horror supernatural"),
    ("The Thirty-Nine Steps", "Buchan, John", 558, "thriller suspense"),
    ("The Riddle of the Sands", "Childers, Erskine", 1906, "thriller suspense"),
    ("The Picture of Dorian Gray", "Wilde, Oscar", 174, "horror gothic"),
    ("The Phantom of the Opera", "Leroux, Gaston", 175, "horror romance"),
    ("Carmilla", "Le Fanu, Sheridan", 10007, "horror gothic"),
    ("The Turn of the Screw", "James, Henry", 209, "horror ghost"),
    ("Pride and Prejudice", "Austen, Jane", 1342, "romance classic"),
    ("Persuasion", "Austen, Jane", 105, "romance classic"),
    ("Jane Eyre", "Brontë, Charlotte", 1260, "romance gothic"),
    ("Wuthering Heights", "Brontë, Emily", 768, "romance gothic"),
    ("Three Men in a Boat", "Jerome, Jerome K.", 308, "humor comedy"),
    ("The Diary of a Nobody", "Grossmith, George", 1026, "humor comedy"),
];

/// Number of physical copies stocked for each curated classic
const CURATED_COPIES: u32 = 5;

/// Fixed-table source of famous public-domain novels
pub struct CuratedClassicsSource;

impl CuratedClassicsSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CuratedClassicsSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CandidateSource for CuratedClassicsSource {
    fn name(&self) -> &'static str {
        "curated-classics"
    }

    async fn fetch(&self) -> Result<Vec<RawCandidate>> {
        let candidates = CURATED_CLASSICS
            .iter()
            .map(|&(title, author, gutenberg_id, hint)| {
                let cover_hint = format!(
                    "https://www.gutenberg.org/cache/epub/{id}/pg{id}.cover.medium.jpg",
                    id = gutenberg_id
                );
                let mut links = BTreeMap::new();
                links.insert(
                    "web".to_string(),
                    format!("https://www.gutenberg.org/ebooks/{}", gutenberg_id),
                );

                RawCandidate {
                    title: title.to_string(),
                    author: author.to_string(),
                    external_id: gutenberg_id.to_string(),
                    category_hint: hint.to_string(),
                    media_type: MediaType::Novel,
                    copies: CURATED_COPIES,
                    available_copies: CURATED_COPIES,
                    download_links: Some(links),
                    cover_hint: Some(cover_hint),
                    identifier: IdentifierSpec::Isbn,
                }
            })
            .collect::<Vec<_>>();

        info!(count = candidates.len(), "Curated classics batch ready");
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_curated_batch_shape() {
        let batch = CuratedClassicsSource::new().fetch().await.unwrap();
        assert!(!batch.is_empty());

        for candidate in &batch {
            assert_eq!(candidate.media_type, MediaType::Novel);
            assert_eq!(candidate.identifier, IdentifierSpec::Isbn);
            assert_eq!(candidate.copies, CURATED_COPIES);
            assert_eq!(candidate.available_copies, candidate.copies);
            assert!(candidate.cover_hint.as_deref().unwrap().contains("gutenberg.org"));
        }
    }

    #[tokio::test]
    async fn test_curated_titles_are_unique() {
        let batch = CuratedClassicsSource::new().fetch().await.unwrap();
        let mut titles: Vec<_> = batch.iter().map(|c| c.title.as_str()).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), batch.len());
    }
}
