//! # Catalog Source Adapters
//!
//! Normalizes records from several independent origins into one candidate
//! shape for the assembler. Each origin lives behind the [`CandidateSource`]
//! trait; the Gutendex source talks to the paginated Project Gutenberg
//! listing API, the rest emit curated or derived data.

pub mod candidate;
pub mod error;
pub mod sources;

pub use candidate::{
    CandidateSource, IdentifierSpec, RawCandidate, FALLBACK_AUTHOR, FALLBACK_TITLE,
};
pub use error::{Result, SourceError};
pub use sources::comics::ComicSource;
pub use sources::curated::CuratedClassicsSource;
pub use sources::gutendex::GutendexSource;
pub use sources::magazines::MagazineSource;
pub use sources::manga::MangaSource;
pub use sources::xkcd::XkcdSource;
