//! Deck reading for strata.
//!
//! Turns deck text into an ordered list of [`Keyword`]s, each holding its
//! slash-terminated [`Record`]s of typed [`Item`]s. Repeat counts
//! (`300*2`) are expanded and defaults (`4*`) preserved as
//! [`Item::Default`] so downstream code sees one item per value.
//!
//! Keyword record counts come from a small shape table
//! ([`keyword_shape`]) rather than a full keyword schema: section markers
//! carry no data, edit keywords carry records until an empty `/`, and
//! everything else carries exactly one record.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod deck;
pub mod error;
pub mod item;
pub mod lexer;
mod reader;
pub mod shape;

pub use deck::{Deck, Keyword, Record};
pub use error::DeckError;
pub use item::Item;
pub use shape::{is_section_keyword, keyword_shape, KeywordShape, SECTION_KEYWORDS};
