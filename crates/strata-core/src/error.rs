//! Error types for grid addressing and region-scoped property edits.
//!
//! [`GridError`] covers index arithmetic against a [`GridExtent`]. It is
//! wrapped by [`EditError`], the fatal error taxonomy surfaced by region
//! transitions, operator application and keyword processing.

use std::error::Error;
use std::fmt;

use crate::extent::GridExtent;
use crate::scalar::ScalarKind;

/// Errors from grid construction and cell addressing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct an extent with a zero dimension.
    EmptyExtent {
        /// Requested cell count along i.
        nx: usize,
        /// Requested cell count along j.
        ny: usize,
        /// Requested cell count along k.
        nz: usize,
    },
    /// `nx * ny * nz` does not fit in `usize`.
    CellCountOverflow {
        /// Requested cell count along i.
        nx: usize,
        /// Requested cell count along j.
        ny: usize,
        /// Requested cell count along k.
        nz: usize,
    },
    /// An `(i, j, k)` triple lies outside the extent.
    IjkOutOfBounds {
        /// Offending i index (0-based).
        i: usize,
        /// Offending j index (0-based).
        j: usize,
        /// Offending k index (0-based).
        k: usize,
        /// The extent the triple was checked against.
        extent: GridExtent,
    },
    /// A flat cell index is `>= cell_count`.
    FlatOutOfBounds {
        /// Offending flat index.
        index: usize,
        /// Number of cells in the extent.
        cell_count: usize,
    },
    /// A value buffer does not hold exactly one value per cell.
    LengthMismatch {
        /// Cell count of the extent.
        expected: usize,
        /// Length of the supplied buffer.
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyExtent { nx, ny, nz } => {
                write!(f, "grid extent {nx}x{ny}x{nz} has a zero dimension")
            }
            Self::CellCountOverflow { nx, ny, nz } => {
                write!(f, "grid extent {nx}x{ny}x{nz} overflows usize")
            }
            Self::IjkOutOfBounds { i, j, k, extent } => {
                write!(f, "cell ({i},{j},{k}) out of bounds for grid {extent}")
            }
            Self::FlatOutOfBounds { index, cell_count } => {
                write!(f, "flat index {index} out of bounds for {cell_count} cells")
            }
            Self::LengthMismatch { expected, found } => {
                write!(f, "expected {expected} values, got {found}")
            }
        }
    }
}

impl Error for GridError {}

/// Fatal conditions raised while applying deck records to property fields.
///
/// Every variant aborts the current processing pass. Fields mutated by
/// earlier records stay mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditError {
    /// A box is inverted, outside the grid extent, degenerate, or only
    /// partially specified.
    InvalidRegion {
        /// What went wrong.
        reason: String,
    },
    /// A record names a property that is not present in the store.
    UnknownField {
        /// The property name as written in the deck.
        name: String,
    },
    /// Source and target kinds are incompatible, or a value cannot be
    /// represented in the target kind.
    TypeMismatch {
        /// Description of the mismatch.
        reason: String,
    },
    /// A cell index escaped the grid. Unreachable with a validated region.
    OutOfBounds(GridError),
    /// A data keyword supplied a different number of values than the
    /// active region holds.
    DataSizeMismatch {
        /// Number of cells in the active region.
        expected: usize,
        /// Number of values in the record.
        found: usize,
    },
    /// A record is missing items or carries items of the wrong type.
    MalformedRecord {
        /// Description of the problem.
        reason: String,
    },
    /// A keyword is neither a known edit keyword nor a declared property,
    /// and the processor is configured to reject such keywords.
    UnknownKeyword {
        /// The keyword name.
        name: String,
    },
}

impl EditError {
    /// Shorthand for a [`TypeMismatch`](Self::TypeMismatch) between two kinds.
    pub fn kind_mismatch(target: ScalarKind, source: ScalarKind) -> Self {
        Self::TypeMismatch {
            reason: format!("cannot combine {source} source with {target} target"),
        }
    }
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRegion { reason } => write!(f, "invalid region: {reason}"),
            Self::UnknownField { name } => write!(f, "unknown property '{name}'"),
            Self::TypeMismatch { reason } => write!(f, "type mismatch: {reason}"),
            Self::OutOfBounds(e) => write!(f, "out of bounds: {e}"),
            Self::DataSizeMismatch { expected, found } => write!(
                f,
                "data size mismatch: active region has {expected} cells, record has {found} values"
            ),
            Self::MalformedRecord { reason } => write!(f, "malformed record: {reason}"),
            Self::UnknownKeyword { name } => write!(f, "unknown keyword '{name}'"),
        }
    }
}

impl Error for EditError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::OutOfBounds(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for EditError {
    fn from(e: GridError) -> Self {
        Self::OutOfBounds(e)
    }
}
