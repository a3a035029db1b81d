//! Box regions for strata.
//!
//! A [`CellBox`] is an inclusive, validated, 0-based index box inside a
//! [`GridExtent`](strata_core::GridExtent). [`ActiveRegion`] is the
//! `BOX`/`ENDBOX` state machine that decides which box subsequent edits
//! apply to. Deck bounds arrive as [`BoxBounds`] in the deck's
//! [`IndexBase`] and are normalised before validation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod active;
pub mod bounds;
pub mod cell_box;

pub use active::{ActiveRegion, RegionState};
pub use bounds::{BoxBounds, IndexBase};
pub use cell_box::{CellBox, CellIter};
