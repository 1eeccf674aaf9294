//! Synthesized placeholder covers
//!
//! The last link of the resolution chain, and the detector the refresh pass
//! uses to decide which records still need a real cover.

use core_model::MediaType;

const PLACEHOLDER_BASE: &str = "https://picsum.photos/seed";

/// URL fragments that mark a cover as a stand-in rather than real artwork.
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "picsum.photos/seed/",
    "via.placeholder.com",
    "placeholder",
    "default.jpg",
    "default-M.jpg",
    "default-L.jpg",
    "/files/default/",
    "default/cover.jpg",
];

/// Deterministic placeholder for a record. The seed combines media type and
/// record id so the same record always renders the same image.
pub fn placeholder_url(media_type: MediaType, record_id: u64) -> String {
    format!(
        "{}/{}-{}/400/600",
        PLACEHOLDER_BASE,
        media_type.slug(),
        record_id
    )
}

/// Whether a cover URL is a placeholder (or missing entirely).
pub fn is_placeholder(url: &str) -> bool {
    let url = url.trim();
    url.is_empty() || PLACEHOLDER_PATTERNS.iter().any(|p| url.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_keyed_by_media_and_id() {
        assert_eq!(
            placeholder_url(MediaType::Manga, 1042),
            "https://picsum.photos/seed/manga-1042/400/600"
        );
        assert_ne!(
            placeholder_url(MediaType::Manga, 1042),
            placeholder_url(MediaType::Comic, 1042)
        );
        assert_ne!(
            placeholder_url(MediaType::Manga, 1042),
            placeholder_url(MediaType::Manga, 1043)
        );
    }

    #[test]
    fn own_placeholders_are_detected() {
        assert!(is_placeholder(&placeholder_url(MediaType::Novel, 1001)));
    }

    #[test]
    fn foreign_placeholders_are_detected() {
        assert!(is_placeholder(""));
        assert!(is_placeholder("   "));
        assert!(is_placeholder("https://via.placeholder.com/400x600"));
        assert!(is_placeholder("https://example.com/placeholder.png"));
        assert!(is_placeholder(
            "https://covers.openlibrary.org/b/id/default-M.jpg"
        ));
        assert!(is_placeholder(
            "https://www.gutenberg.org/files/default/cover.jpg"
        ));
    }

    #[test]
    fn real_covers_pass_through() {
        assert!(!is_placeholder(
            "https://www.gutenberg.org/cache/epub/1342/pg1342.cover.medium.jpg"
        ));
        assert!(!is_placeholder(
            "https://covers.openlibrary.org/b/id/123456-L.jpg"
        ));
    }
}
