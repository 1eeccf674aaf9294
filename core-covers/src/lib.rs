//! # Cover Resolution
//!
//! Resolves a display cover URL for each catalog record through an ordered
//! chain: curated override table, the source's own cover link, the Google
//! Books search API, the Open Library search API, and finally a
//! deterministic synthesized placeholder. Resolution never fails: every
//! record ends up with a non-empty cover URL.

pub mod error;
pub mod overrides;
pub mod placeholder;
pub mod providers;
pub mod resolver;

pub use error::{CoverError, Result};
pub use overrides::CuratedCovers;
pub use placeholder::{is_placeholder, placeholder_url};
pub use providers::{CoverProvider, CoverQuery};
pub use resolver::CoverResolver;
