//! The structured grid extent and its flat-index bijection.

use std::fmt;

use crate::error::GridError;

/// Cell counts `(nx, ny, nz)` of a structured grid.
///
/// The flat index of cell `(i, j, k)` is `i + j*nx + k*nx*ny`: i runs
/// fastest, then j, then k. Every other strata type addresses cells through
/// [`flat_index`](Self::flat_index) and [`ijk`](Self::ijk), so the two
/// addressing modes cannot disagree.
///
/// # Examples
///
/// ```
/// use strata_core::GridExtent;
///
/// let extent = GridExtent::new(4, 3, 2).unwrap();
/// assert_eq!(extent.cell_count(), 24);
/// assert_eq!(extent.flat_index(1, 2, 1).unwrap(), 1 + 2 * 4 + 1 * 12);
/// assert_eq!(extent.ijk(21).unwrap(), (1, 2, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridExtent {
    nx: usize,
    ny: usize,
    nz: usize,
}

impl GridExtent {
    /// Create an extent. All three dimensions must be positive and their
    /// product must fit in `usize`.
    pub fn new(nx: usize, ny: usize, nz: usize) -> Result<Self, GridError> {
        if nx == 0 || ny == 0 || nz == 0 {
            return Err(GridError::EmptyExtent { nx, ny, nz });
        }
        nx.checked_mul(ny)
            .and_then(|n| n.checked_mul(nz))
            .ok_or(GridError::CellCountOverflow { nx, ny, nz })?;
        Ok(Self { nx, ny, nz })
    }

    /// Cells along i.
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Cells along j.
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Cells along k.
    pub fn nz(&self) -> usize {
        self.nz
    }

    /// Total number of cells, `nx * ny * nz`.
    pub fn cell_count(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Whether `(i, j, k)` addresses a cell of this extent.
    pub fn contains(&self, i: usize, j: usize, k: usize) -> bool {
        i < self.nx && j < self.ny && k < self.nz
    }

    /// Map `(i, j, k)` to its flat index.
    pub fn flat_index(&self, i: usize, j: usize, k: usize) -> Result<usize, GridError> {
        if !self.contains(i, j, k) {
            return Err(GridError::IjkOutOfBounds {
                i,
                j,
                k,
                extent: *self,
            });
        }
        Ok(i + j * self.nx + k * self.nx * self.ny)
    }

    /// Map a flat index back to `(i, j, k)`.
    pub fn ijk(&self, g: usize) -> Result<(usize, usize, usize), GridError> {
        if g >= self.cell_count() {
            return Err(GridError::FlatOutOfBounds {
                index: g,
                cell_count: self.cell_count(),
            });
        }
        let layer = self.nx * self.ny;
        let k = g / layer;
        let rem = g % layer;
        Ok((rem % self.nx, rem / self.nx, k))
    }
}

impl fmt::Display for GridExtent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.nx, self.ny, self.nz)
    }
}
