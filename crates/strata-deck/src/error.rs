//! Errors from deck tokenizing and record assembly.

use std::error::Error;
use std::fmt;

use strata_core::GridError;

/// Errors arising while turning deck text into keywords and records.
///
/// Line numbers are 1-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeckError {
    /// The lexer could not match any token (e.g. an unterminated quote).
    InvalidToken {
        /// Line of the offending text.
        line: usize,
    },
    /// Something other than a keyword name appeared where a keyword was
    /// expected.
    ExpectedKeyword {
        /// Line of the offending token.
        line: usize,
        /// The token that was found.
        found: String,
    },
    /// The input ended inside a record.
    UnterminatedRecord {
        /// Keyword owning the record.
        keyword: String,
        /// Line the keyword started on.
        line: usize,
    },
    /// A repeat count such as `0*1` is not a positive integer.
    InvalidRepeat {
        /// Line of the repeat.
        line: usize,
        /// The repeat as written.
        text: String,
    },
    /// A required keyword is absent from the deck.
    MissingKeyword {
        /// The keyword name.
        name: &'static str,
    },
    /// The grid dimensions in `DIMENS` are malformed.
    InvalidDimens {
        /// What went wrong.
        reason: String,
    },
    /// `DIMENS` describes an invalid grid.
    Grid(GridError),
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidToken { line } => write!(f, "line {line}: unrecognised token"),
            Self::ExpectedKeyword { line, found } => {
                write!(f, "line {line}: expected keyword, found '{found}'")
            }
            Self::UnterminatedRecord { keyword, line } => {
                write!(f, "line {line}: record of {keyword} is not terminated by '/'")
            }
            Self::InvalidRepeat { line, text } => {
                write!(f, "line {line}: invalid repeat count in '{text}'")
            }
            Self::MissingKeyword { name } => write!(f, "deck has no {name} keyword"),
            Self::InvalidDimens { reason } => write!(f, "invalid DIMENS: {reason}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for DeckError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for DeckError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
