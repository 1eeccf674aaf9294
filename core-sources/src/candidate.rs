//! Normalized candidate shape and the source adapter trait

use async_trait::async_trait;
use core_model::MediaType;
use std::collections::BTreeMap;

use crate::error::Result;

/// Substituted when a source record carries no usable title
pub const FALLBACK_TITLE: &str = "Unknown Title";
/// Substituted when a source record carries no usable author
pub const FALLBACK_AUTHOR: &str = "Unknown Author";

/// How a record's public identifier is rendered, by provenance
///
/// The Gutenberg and xkcd forms embed the source-native number; the rest
/// embed the record id the allocator assigns, so they can only be rendered
/// after allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierSpec {
    /// `ISBN-%04d` from the allocated record id
    Isbn,
    /// `PG-%06d` from the Gutenberg book number
    Gutenberg(u64),
    /// `XKCD-%06d` from the strip number
    Xkcd(u64),
    /// `MANGA-%06d` from the allocated record id
    Manga,
    /// `COMIC-%06d` from the allocated record id
    Comic,
    /// `ISSN-%06d` from the allocated record id
    Issn,
}

impl IdentifierSpec {
    /// Render the identifier for an allocated record id
    pub fn format(&self, record_id: u64) -> String {
        match self {
            IdentifierSpec::Isbn => format!("ISBN-{:04}", record_id),
            IdentifierSpec::Gutenberg(n) => format!("PG-{:06}", n),
            IdentifierSpec::Xkcd(n) => format!("XKCD-{:06}", n),
            IdentifierSpec::Manga => format!("MANGA-{:06}", record_id),
            IdentifierSpec::Comic => format!("COMIC-{:06}", record_id),
            IdentifierSpec::Issn => format!("ISSN-{:06}", record_id),
        }
    }
}

/// One origin's record normalized into the common candidate shape
#[derive(Debug, Clone)]
pub struct RawCandidate {
    pub title: String,
    pub author: String,
    /// Source-native id, recorded as provenance
    pub external_id: String,
    /// Free-text subject list or hint string for the classifier
    pub category_hint: String,
    pub media_type: MediaType,
    pub copies: u32,
    /// Clamped to `copies` by construction
    pub available_copies: u32,
    pub download_links: Option<BTreeMap<String, String>>,
    /// Cover URL the source itself advertises, if any
    pub cover_hint: Option<String>,
    pub identifier: IdentifierSpec,
}

/// Fall back to the fixed title when the source field is missing or blank
pub fn title_or_fallback(raw: Option<&str>) -> String {
    match raw {
        Some(t) if !t.trim().is_empty() => t.to_string(),
        _ => FALLBACK_TITLE.to_string(),
    }
}

/// Fall back to the fixed author when the source field is missing or blank
pub fn author_or_fallback(raw: Option<&str>) -> String {
    match raw {
        Some(a) if !a.trim().is_empty() => a.to_string(),
        _ => FALLBACK_AUTHOR.to_string(),
    }
}

/// A batch-producing origin of catalog candidates
///
/// Sources are fetched in declared order by the assembler; a failing source
/// is logged and skipped, it never aborts the run.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Stable adapter name, recorded as record provenance
    fn name(&self) -> &'static str;

    /// Produce this origin's candidates
    ///
    /// # Errors
    /// Returns error only when the whole batch is unavailable (e.g. the
    /// listing API cannot be reached at all); partial page failures are
    /// handled internally.
    async fn fetch(&self) -> Result<Vec<RawCandidate>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_formats() {
        assert_eq!(IdentifierSpec::Isbn.format(42), "ISBN-0042");
        assert_eq!(IdentifierSpec::Gutenberg(2701).format(1234), "PG-002701");
        assert_eq!(IdentifierSpec::Xkcd(15).format(2055), "XKCD-000015");
        assert_eq!(IdentifierSpec::Manga.format(2055), "MANGA-002055");
        assert_eq!(IdentifierSpec::Comic.format(2101), "COMIC-002101");
        assert_eq!(IdentifierSpec::Issn.format(3001), "ISSN-003001");
    }

    #[test]
    fn test_isbn_format_does_not_truncate_wide_ids() {
        assert_eq!(IdentifierSpec::Isbn.format(123456), "ISBN-123456");
    }

    #[test]
    fn test_fallback_substitution() {
        assert_eq!(title_or_fallback(None), FALLBACK_TITLE);
        assert_eq!(title_or_fallback(Some("  ")), FALLBACK_TITLE);
        assert_eq!(title_or_fallback(Some("Dune")), "Dune");
        assert_eq!(author_or_fallback(None), FALLBACK_AUTHOR);
        assert_eq!(author_or_fallback(Some("Herbert, Frank")), "Herbert, Frank");
    }
}
