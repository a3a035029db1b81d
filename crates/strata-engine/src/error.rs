//! Errors raised by a processing pass.

use std::error::Error;
use std::fmt;

use strata_core::EditError;
use strata_deck::DeckError;

use crate::config::ConfigError;

/// An [`EditError`] located at the keyword and record that raised it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessError {
    /// Keyword name.
    pub keyword: String,
    /// Line the keyword starts on (1-based; 0 for synthetic keywords).
    pub line: usize,
    /// Zero-based index of the failing record, when one is to blame.
    pub record: Option<usize>,
    /// What went wrong.
    pub kind: EditError,
}

impl ProcessError {
    pub(crate) fn new(keyword: &str, line: usize, record: Option<usize>, kind: EditError) -> Self {
        Self {
            keyword: keyword.to_owned(),
            line,
            record,
            kind,
        }
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (line {}", self.keyword, self.line)?;
        if let Some(record) = self.record {
            write!(f, ", record {}", record + 1)?;
        }
        write!(f, "): {}", self.kind)
    }
}

impl Error for ProcessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.kind)
    }
}

/// Any failure of [`load_properties`](crate::load_properties).
#[derive(Clone, Debug, PartialEq)]
pub enum EngineError {
    /// The processor configuration is invalid.
    Config(ConfigError),
    /// The deck text could not be read.
    Deck(DeckError),
    /// A keyword failed to apply.
    Process(ProcessError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::Deck(e) => write!(f, "deck error: {e}"),
            Self::Process(e) => write!(f, "processing error: {e}"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Deck(e) => Some(e),
            Self::Process(e) => Some(e),
        }
    }
}

impl From<ConfigError> for EngineError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<DeckError> for EngineError {
    fn from(e: DeckError) -> Self {
        Self::Deck(e)
    }
}

impl From<ProcessError> for EngineError {
    fn from(e: ProcessError) -> Self {
        Self::Process(e)
    }
}
