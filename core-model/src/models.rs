//! Domain models for the assembled catalog
//!
//! Field names follow the persisted snapshot document (camelCase, media type
//! under the `type` key).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Sentinel copy count for purely digital items with no physical stock
/// (webcomics and similar always-available entries).
pub const UNLIMITED_COPIES: u32 = 999;

/// Media type of a catalog record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MediaType {
    Novel,
    Comic,
    Manga,
    Magazine,
}

impl MediaType {
    /// Lowercase form used to salt placeholder cover seeds
    pub fn slug(&self) -> &'static str {
        match self {
            MediaType::Novel => "novel",
            MediaType::Comic => "comic",
            MediaType::Manga => "manga",
            MediaType::Magazine => "magazine",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MediaType::Novel => "Novel",
            MediaType::Comic => "Comic",
            MediaType::Manga => "Manga",
            MediaType::Magazine => "Magazine",
        };
        write!(f, "{}", name)
    }
}

/// Which source adapter produced a record, plus that source's native id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provenance {
    /// Source adapter name (e.g. "gutendex", "xkcd")
    pub source: String,
    /// Source-native identifier
    pub source_id: String,
}

/// One book/comic/manga/magazine entry in the assembled dataset
///
/// Records are created once during a merge pass and are not mutated
/// afterwards, except for `cover_image` which a later refresh pass may
/// rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    /// Unique id, strictly increasing in assembly order
    pub id: u64,
    /// Title, unique across the catalog under exact-string comparison
    pub title: String,
    pub author: String,
    /// Provenance-dependent identifier (ISBN-%04d, PG-%06d, ...)
    pub identifier: String,
    /// "<MediaType> - <Taxonomy>"
    pub category: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    /// Total copies; >= 1, or [`UNLIMITED_COPIES`] for digital items
    pub copies: u32,
    /// Always within 0..=copies
    pub available_copies: u32,
    /// Display cover URL; always set, never empty
    pub cover_image: String,
    /// Format name -> URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_links: Option<BTreeMap<String, String>>,
    pub provenance: Provenance,
}

impl CatalogRecord {
    /// Whether this record uses the unlimited digital-stock sentinel
    pub fn is_unlimited(&self) -> bool {
        self.copies == UNLIMITED_COPIES
    }

    /// Validate the record invariants
    ///
    /// # Errors
    /// Returns `ModelError::InvalidRecord` naming the offending field.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.title.is_empty() {
            return Err(crate::error::ModelError::InvalidRecord {
                field: "title".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.copies == 0 {
            return Err(crate::error::ModelError::InvalidRecord {
                field: "copies".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.available_copies > self.copies {
            return Err(crate::error::ModelError::InvalidRecord {
                field: "availableCopies".to_string(),
                message: format!("{} exceeds copies {}", self.available_copies, self.copies),
            });
        }
        if self.cover_image.is_empty() {
            return Err(crate::error::ModelError::InvalidRecord {
                field: "coverImage".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// User role in the library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Librarian,
    Member,
}

/// A library user, generated independently of the catalog records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}
