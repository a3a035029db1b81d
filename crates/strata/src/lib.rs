//! Strata: region-scoped property editing for reservoir simulation decks.
//!
//! This is the facade crate re-exporting the public API of the strata
//! sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! let deck = Deck::parse(
//!     "DIMENS\n 4 4 2 /\n\
//!      REGIONS\n\
//!      EQUALS\n SATNUM 2 /\n/\n\
//!      BOX\n 1 2 1 2 1 1 /\n\
//!      EQUALS\n SATNUM 10 /\n/\n\
//!      ENDBOX\n\
//!      COPY\n SATNUM FIPNUM /\n/\n",
//! )
//! .unwrap();
//!
//! let mut store = PropertyStore::with_standard_properties(deck.extent().unwrap());
//! KeywordProcessor::new(&mut store, ProcessorConfig::default())
//!     .unwrap()
//!     .process_deck(&deck)
//!     .unwrap();
//!
//! let fipnum = store.int_field("FIPNUM").unwrap();
//! assert_eq!(fipnum.get(1, 1, 0).unwrap(), 10);
//! assert_eq!(fipnum.get(2, 1, 0).unwrap(), 2);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strata-core` | Grid extent, property fields, error taxonomy |
//! | [`deck`] | `strata-deck` | Deck tokenizer and keyword/record model |
//! | [`region`] | `strata-region` | Cell boxes and the `BOX`/`ENDBOX` state machine |
//! | [`ops`] | `strata-ops` | Region operators and `OPERATE` functions |
//! | [`engine`] | `strata-engine` | Keyword processor, property store, configuration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid extent, property fields and errors (`strata-core`).
pub use strata_core as types;

/// Deck reading (`strata-deck`).
///
/// [`deck::Deck::parse`] turns deck text into keywords and records.
pub use strata_deck as deck;

/// Box regions (`strata-region`).
pub use strata_region as region;

/// Region operators (`strata-ops`).
pub use strata_ops as ops;

/// Keyword processing (`strata-engine`).
///
/// [`engine::KeywordProcessor`] applies a deck to an
/// [`engine::PropertyStore`]; [`engine::load_properties`] does both steps
/// for deck text.
pub use strata_engine as engine;

/// Common imports for typical strata usage.
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use strata_core::{GridExtent, Property, PropertyField, Scalar, ScalarKind};

    // Errors
    pub use strata_core::{EditError, GridError};
    pub use strata_deck::DeckError;
    pub use strata_engine::{ConfigError, EngineError, ProcessError};

    // Deck
    pub use strata_deck::{Deck, Item, Keyword, Record};

    // Regions and operators
    pub use strata_ops::{OperateFn, RegionOperator};
    pub use strata_region::{ActiveRegion, BoxBounds, CellBox, IndexBase};

    // Engine
    pub use strata_engine::{
        load_properties, KeywordProcessor, PassStats, ProcessorConfig, PropertyStore,
        UnknownKeywordPolicy,
    };
}
