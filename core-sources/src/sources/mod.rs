//! Concrete candidate sources, in the order the assembler runs them

pub mod comics;
pub mod curated;
pub mod gutendex;
pub mod magazines;
pub mod manga;
pub mod xkcd;
