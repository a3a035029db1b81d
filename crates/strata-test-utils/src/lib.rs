//! Test utilities for strata development.
//!
//! Reference decks live in [`decks`]. The helpers below build stores and
//! walk grids so tests can state expectations per cell.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod decks;

use strata_core::GridExtent;
use strata_deck::Deck;
use strata_engine::{KeywordProcessor, ProcessError, ProcessorConfig, PropertyStore};

/// Parse a fixture deck. Panics on malformed fixtures.
pub fn parse(src: &str) -> Deck {
    match Deck::parse(src) {
        Ok(deck) => deck,
        Err(e) => panic!("fixture deck does not parse: {e}"),
    }
}

/// A standard store sized from the deck's `DIMENS`.
pub fn standard_store(deck: &Deck) -> PropertyStore {
    match deck.extent() {
        Ok(extent) => PropertyStore::with_standard_properties(extent),
        Err(e) => panic!("fixture deck has no usable DIMENS: {e}"),
    }
}

/// Process `src` with the default configuration against a standard store.
///
/// Returns the store together with the outcome so tests can inspect the
/// state left behind by a failing pass.
pub fn run_deck(src: &str) -> (PropertyStore, Result<(), ProcessError>) {
    run_deck_with(src, ProcessorConfig::default())
}

/// [`run_deck`] with an explicit configuration.
pub fn run_deck_with(
    src: &str,
    config: ProcessorConfig,
) -> (PropertyStore, Result<(), ProcessError>) {
    let deck = parse(src);
    let mut store = standard_store(&deck);
    let outcome = match KeywordProcessor::new(&mut store, config) {
        Ok(mut processor) => processor.process_deck(&deck).map(|_| ()),
        Err(e) => panic!("fixture configuration is invalid: {e}"),
    };
    (store, outcome)
}

/// Every `(i, j, k)` of `extent`, i fastest.
pub fn cells(extent: GridExtent) -> impl Iterator<Item = (usize, usize, usize)> {
    (0..extent.nz()).flat_map(move |k| {
        (0..extent.ny()).flat_map(move |j| (0..extent.nx()).map(move |i| (i, j, k)))
    })
}

/// Relative closeness, in percent, in the style of a `CHECK_CLOSE`.
pub fn close(a: f64, b: f64, percent: f64) -> bool {
    if a == b {
        return true;
    }
    let scale = a.abs().max(b.abs());
    (a - b).abs() / scale * 100.0 <= percent
}
