//! Processor configuration, validation, and error types.
//!
//! [`ProcessorConfig`] is the input for constructing a
//! [`KeywordProcessor`](crate::KeywordProcessor).
//! [`validate()`](ProcessorConfig::validate) checks structural invariants
//! before any record is applied.

use std::error::Error;
use std::fmt;

use strata_deck::{keyword_shape, KeywordShape, SECTION_KEYWORDS};
use strata_region::IndexBase;

// ── UnknownKeywordPolicy ───────────────────────────────────────────

/// What to do with a keyword that is neither a region keyword, an edit
/// keyword, nor a property declared in the store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownKeywordPolicy {
    /// Skip it. Decks carry many keywords outside property editing
    /// (`DIMENS`, `TABDIMS`, `WELSPECS`, ...). Default.
    #[default]
    Ignore,
    /// Fail the pass with [`EditError::UnknownKeyword`](strata_core::EditError::UnknownKeyword).
    Reject,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`ProcessorConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A section keyword name is empty.
    EmptySectionKeyword,
    /// `ENDBOX` cannot double as a section keyword.
    ReservedSectionKeyword {
        /// The offending name.
        name: String,
    },
    /// A section keyword is one the deck reader expects records for, so it
    /// could never appear as a bare section marker.
    SectionKeywordCarriesData {
        /// The offending name.
        name: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySectionKeyword => write!(f, "section keyword name is empty"),
            Self::ReservedSectionKeyword { name } => {
                write!(f, "{name} is reserved and cannot be a section keyword")
            }
            Self::SectionKeywordCarriesData { name } => {
                write!(f, "{name} carries records and cannot be a section keyword")
            }
        }
    }
}

impl Error for ConfigError {}

// ── ProcessorConfig ────────────────────────────────────────────────

/// Configuration for one keyword-processing pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessorConfig {
    /// How deck box bounds are numbered. Default: [`IndexBase::One`].
    pub index_base: IndexBase,
    /// Handling of unrecognised keywords. Default: ignore.
    pub unknown_keywords: UnknownKeywordPolicy,
    /// Keywords that end any `BOX` in force. Default: the deck section
    /// keywords (`RUNSPEC`, `GRID`, `EDIT`, `PROPS`, `REGIONS`,
    /// `SOLUTION`, `SUMMARY`, `SCHEDULE`). Empty means boxes only end at
    /// `ENDBOX`.
    pub section_keywords: Vec<String>,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            index_base: IndexBase::One,
            unknown_keywords: UnknownKeywordPolicy::Ignore,
            section_keywords: SECTION_KEYWORDS.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

impl ProcessorConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for name in &self.section_keywords {
            if name.is_empty() {
                return Err(ConfigError::EmptySectionKeyword);
            }
            if name == "ENDBOX" {
                return Err(ConfigError::ReservedSectionKeyword { name: name.clone() });
            }
            if keyword_shape(name) != KeywordShape::NoData {
                return Err(ConfigError::SectionKeywordCarriesData { name: name.clone() });
            }
        }
        Ok(())
    }

    /// Whether `name` ends the current box.
    pub fn is_section(&self, name: &str) -> bool {
        self.section_keywords.iter().any(|s| s == name)
    }
}
