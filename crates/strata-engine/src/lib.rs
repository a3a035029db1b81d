//! Keyword processing for strata.
//!
//! A [`KeywordProcessor`] walks a parsed [`Deck`](strata_deck::Deck) in
//! order and applies it to a [`PropertyStore`]: `BOX`/`ENDBOX` and section
//! keywords move the active region, edit keywords apply
//! [`RegionOperator`](strata_ops::RegionOperator)s, and keywords naming a
//! declared property load values into the active region.
//!
//! [`load_properties`] wraps the whole pipeline for deck text.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod processor;
pub mod record;
pub mod store;

pub use config::{ConfigError, ProcessorConfig, UnknownKeywordPolicy};
pub use error::{EngineError, ProcessError};
pub use processor::{KeywordProcessor, PassStats};
pub use record::{EditKeyword, EditRecord};
pub use store::PropertyStore;

use strata_deck::Deck;

/// Parse `src`, size a store with the standard properties from its
/// `DIMENS`, and process every keyword.
///
/// ```
/// let store = strata_engine::load_properties(
///     "DIMENS\n 2 1 1 /\nGRID\nPERMX\n 2*50 /\nCOPY\n PERMX PERMZ /\n/\n",
///     strata_engine::ProcessorConfig::default(),
/// )
/// .unwrap();
/// assert_eq!(store.double_field("PERMZ").unwrap().values(), &[50.0, 50.0]);
/// ```
pub fn load_properties(src: &str, config: ProcessorConfig) -> Result<PropertyStore, EngineError> {
    let deck = Deck::parse(src)?;
    let mut store = PropertyStore::with_standard_properties(deck.extent()?);
    KeywordProcessor::new(&mut store, config)?.process_deck(&deck)?;
    Ok(store)
}
