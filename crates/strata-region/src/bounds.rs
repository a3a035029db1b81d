//! Raw box bounds as written in a deck.

use std::fmt;

/// Whether deck indices count from 0 or from 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IndexBase {
    /// Indices start at 0.
    Zero,
    /// Indices start at 1, the usual deck convention.
    #[default]
    One,
}

impl IndexBase {
    fn offset(self) -> i64 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }
}

/// Unvalidated inclusive bounds `(i1, i2, j1, j2, k1, k2)`.
///
/// Kept signed so that out-of-range input (e.g. a 0 in a 1-based deck)
/// survives normalisation and is reported by
/// [`CellBox::new`](crate::CellBox::new) instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoxBounds {
    /// First i index.
    pub i1: i64,
    /// Last i index (inclusive).
    pub i2: i64,
    /// First j index.
    pub j1: i64,
    /// Last j index (inclusive).
    pub j2: i64,
    /// First k index.
    pub k1: i64,
    /// Last k index (inclusive).
    pub k2: i64,
}

impl BoxBounds {
    /// Bounds from the six deck items in order.
    pub fn from_array(b: [i64; 6]) -> Self {
        Self {
            i1: b[0],
            i2: b[1],
            j1: b[2],
            j2: b[3],
            k1: b[4],
            k2: b[5],
        }
    }

    /// Shift to 0-based indices. Saturates, so extreme input stays out of
    /// range rather than wrapping.
    pub fn normalize(self, base: IndexBase) -> Self {
        let o = base.offset();
        Self {
            i1: self.i1.saturating_sub(o),
            i2: self.i2.saturating_sub(o),
            j1: self.j1.saturating_sub(o),
            j2: self.j2.saturating_sub(o),
            k1: self.k1.saturating_sub(o),
            k2: self.k2.saturating_sub(o),
        }
    }

    /// `(lo, hi)` pairs for the i, j and k axes.
    pub fn axes(&self) -> [(i64, i64); 3] {
        [(self.i1, self.i2), (self.j1, self.j2), (self.k1, self.k2)]
    }
}

impl fmt::Display for BoxBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}..{}]x[{}..{}]x[{}..{}]",
            self.i1, self.i2, self.j1, self.j2, self.k1, self.k2
        )
    }
}
