//! Keyword taxonomy classifier
//!
//! Maps a free-text hint (subject lists, genre tags) onto a small fixed
//! taxonomy by case-insensitive substring match. Rules are checked in
//! declaration order, so an entry matching both "gothic" and "romance"
//! lands in Horror. Total: anything unmatched is Fiction.

use core_model::MediaType;

/// Taxonomy rules in priority order.
const CLASSIFICATION_RULES: &[(&str, &[&str])] = &[
    ("Horror", &["horror", "gothic", "ghost", "supernatural", "terror"]),
    ("Romance", &["romance", "love stories", "romantic"]),
    (
        "Thriller",
        &["mystery", "detective", "crime", "suspense", "thriller"],
    ),
    ("Fiction", &["fiction", "novel", "literature"]),
    ("Psychological", &["psychological", "philosophy", "mental"]),
    ("Comedy", &["humor", "humorous", "comedy", "satire"]),
    ("Classic", &["classic", "literature"]),
];

const DEFAULT_LABEL: &str = "Fiction";

/// Classify a hint string into a taxonomy label.
pub fn classify(hint: &str) -> &'static str {
    let hint = hint.to_lowercase();
    CLASSIFICATION_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| hint.contains(k)))
        .map(|(label, _)| *label)
        .unwrap_or(DEFAULT_LABEL)
}

/// Full category string stored on a record: `"<MediaType> - <Label>"`.
pub fn category_label(media_type: MediaType, hint: &str) -> String {
    format!("{} - {}", media_type, classify(hint))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        assert_eq!(classify("Gothic fiction"), "Horror");
        assert_eq!(classify("GOTHIC FICTION"), "Horror");
    }

    #[test]
    fn test_priority_order_breaks_ties() {
        // Matches Horror ("gothic") and Romance ("romance"); Horror is
        // declared first.
        assert_eq!(classify("gothic romance"), "Horror");
        // "literature" appears under both Fiction and Classic.
        assert_eq!(classify("english literature"), "Fiction");
    }

    #[test]
    fn test_unmatched_and_empty_hints_default_to_fiction() {
        assert_eq!(classify(""), "Fiction");
        assert_eq!(classify("astronomy"), "Fiction");
    }

    #[test]
    fn test_deterministic() {
        for _ in 0..3 {
            assert_eq!(classify("detective stories"), "Thriller");
        }
    }

    #[test]
    fn test_category_label_prefixes_media_type() {
        assert_eq!(
            category_label(MediaType::Manga, "supernatural action"),
            "Manga - Horror"
        );
        assert_eq!(
            category_label(MediaType::Magazine, "current affairs"),
            "Magazine - Fiction"
        );
    }
}
