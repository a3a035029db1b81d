//! Validated cell boxes and their i-fastest iteration.

use std::iter::FusedIterator;
use std::ops::RangeInclusive;

use strata_core::{EditError, GridExtent};

use crate::bounds::BoxBounds;

const AXES: [&str; 3] = ["i", "j", "k"];

/// A non-empty inclusive box of cells inside a grid extent.
///
/// Construction is the only place bounds are checked; every `CellBox` in
/// existence addresses valid, non-degenerate cells.
///
/// # Examples
///
/// ```
/// use strata_core::GridExtent;
/// use strata_region::{BoxBounds, CellBox};
///
/// let extent = GridExtent::new(10, 10, 3).unwrap();
/// let b = CellBox::new(extent, BoxBounds::from_array([0, 1, 0, 1, 0, 1])).unwrap();
/// assert_eq!(b.cell_count(), 8);
/// let cells: Vec<_> = b.iter().take(3).collect();
/// assert_eq!(cells, vec![(0, 0, 0), (1, 0, 0), (0, 1, 0)]);
///
/// // Bounds past the extent are rejected, never clipped.
/// assert!(CellBox::new(extent, BoxBounds::from_array([0, 10, 0, 1, 0, 1])).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellBox {
    extent: GridExtent,
    lo: [usize; 3],
    hi: [usize; 3],
}

impl CellBox {
    /// The box covering every cell of `extent`.
    pub fn full(extent: GridExtent) -> Self {
        Self {
            extent,
            lo: [0; 3],
            hi: [extent.nx() - 1, extent.ny() - 1, extent.nz() - 1],
        }
    }

    /// Validate 0-based `bounds` against `extent`.
    ///
    /// Fails with [`EditError::InvalidRegion`] if any bound is negative,
    /// any axis is inverted, or any upper bound reaches past the extent.
    pub fn new(extent: GridExtent, bounds: BoxBounds) -> Result<Self, EditError> {
        let dims = [extent.nx(), extent.ny(), extent.nz()];
        let mut lo = [0usize; 3];
        let mut hi = [0usize; 3];
        for (axis, (l, h)) in bounds.axes().into_iter().enumerate() {
            let name = AXES[axis];
            let (Ok(l), Ok(h)) = (usize::try_from(l), usize::try_from(h)) else {
                return Err(EditError::InvalidRegion {
                    reason: format!("{name} bounds {l}..{h} below grid origin"),
                });
            };
            if l > h {
                return Err(EditError::InvalidRegion {
                    reason: format!("{name} bounds {l}..{h} are inverted"),
                });
            }
            if h >= dims[axis] {
                return Err(EditError::InvalidRegion {
                    reason: format!(
                        "{name} upper bound {h} exceeds grid extent {}",
                        dims[axis]
                    ),
                });
            }
            lo[axis] = l;
            hi[axis] = h;
        }
        Ok(Self { extent, lo, hi })
    }

    /// The extent this box lies in.
    pub fn extent(&self) -> GridExtent {
        self.extent
    }

    /// Inclusive i range.
    pub fn i_range(&self) -> RangeInclusive<usize> {
        self.lo[0]..=self.hi[0]
    }

    /// Inclusive j range.
    pub fn j_range(&self) -> RangeInclusive<usize> {
        self.lo[1]..=self.hi[1]
    }

    /// Inclusive k range.
    pub fn k_range(&self) -> RangeInclusive<usize> {
        self.lo[2]..=self.hi[2]
    }

    /// Cells along each axis.
    pub fn dims(&self) -> [usize; 3] {
        [
            self.hi[0] - self.lo[0] + 1,
            self.hi[1] - self.lo[1] + 1,
            self.hi[2] - self.lo[2] + 1,
        ]
    }

    /// Number of cells in the box. Always at least 1.
    pub fn cell_count(&self) -> usize {
        self.dims().iter().product()
    }

    /// Whether the box spans the whole extent.
    pub fn is_full(&self) -> bool {
        *self == Self::full(self.extent)
    }

    /// Whether `(i, j, k)` lies in the box.
    pub fn contains(&self, i: usize, j: usize, k: usize) -> bool {
        self.i_range().contains(&i) && self.j_range().contains(&j) && self.k_range().contains(&k)
    }

    /// Every cell, i fastest, then j, then k. Each call starts afresh.
    pub fn iter(&self) -> CellIter {
        CellIter {
            lo: self.lo,
            hi: self.hi,
            next: Some(self.lo),
            remaining: self.cell_count(),
        }
    }
}

impl IntoIterator for &CellBox {
    type Item = (usize, usize, usize);
    type IntoIter = CellIter;

    fn into_iter(self) -> CellIter {
        self.iter()
    }
}

/// Iterator over the `(i, j, k)` cells of a [`CellBox`].
#[derive(Clone, Debug)]
pub struct CellIter {
    lo: [usize; 3],
    hi: [usize; 3],
    next: Option<[usize; 3]>,
    remaining: usize,
}

impl Iterator for CellIter {
    type Item = (usize, usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let cur = self.next?;
        let mut n = cur;
        self.next = if n[0] < self.hi[0] {
            n[0] += 1;
            Some(n)
        } else if n[1] < self.hi[1] {
            n[0] = self.lo[0];
            n[1] += 1;
            Some(n)
        } else if n[2] < self.hi[2] {
            n[0] = self.lo[0];
            n[1] = self.lo[1];
            n[2] += 1;
            Some(n)
        } else {
            None
        };
        self.remaining -= 1;
        Some((cur[0], cur[1], cur[2]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for CellIter {}

impl FusedIterator for CellIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn extent() -> GridExtent {
        GridExtent::new(4, 3, 2).unwrap()
    }

    fn bounds(b: [i64; 6]) -> BoxBounds {
        BoxBounds::from_array(b)
    }

    #[test]
    fn full_box_covers_extent_in_flat_order() {
        let e = extent();
        let flat: Vec<usize> = CellBox::full(e)
            .iter()
            .map(|(i, j, k)| e.flat_index(i, j, k).unwrap())
            .collect();
        assert_eq!(flat, (0..24).collect::<Vec<_>>());
    }

    #[test]
    fn single_cell_box() {
        let b = CellBox::new(extent(), bounds([2, 2, 1, 1, 0, 0])).unwrap();
        assert_eq!(b.iter().collect::<Vec<_>>(), vec![(2, 1, 0)]);
        assert!(!b.is_full());
    }

    #[test]
    fn inverted_axis_is_rejected() {
        let err = CellBox::new(extent(), bounds([0, 1, 2, 1, 0, 0])).unwrap_err();
        assert!(matches!(err, EditError::InvalidRegion { ref reason } if reason.starts_with("j")));
    }

    #[test]
    fn bound_past_extent_is_rejected() {
        assert!(CellBox::new(extent(), bounds([0, 4, 0, 0, 0, 0])).is_err());
        assert!(CellBox::new(extent(), bounds([0, 0, 0, 0, 0, 2])).is_err());
    }

    #[test]
    fn negative_bound_is_rejected() {
        assert!(matches!(
            CellBox::new(extent(), bounds([-1, 0, 0, 0, 0, 0])),
            Err(EditError::InvalidRegion { .. })
        ));
    }

    #[test]
    fn iteration_restarts() {
        let b = CellBox::new(extent(), bounds([1, 2, 0, 1, 0, 1])).unwrap();
        let first: Vec<_> = b.iter().collect();
        let second: Vec<_> = b.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 8);
    }

    proptest! {
        #[test]
        fn iter_yields_exactly_the_contained_cells(
            i1 in 0i64..4, i2 in 0i64..4,
            j1 in 0i64..3, j2 in 0i64..3,
            k1 in 0i64..2, k2 in 0i64..2,
        ) {
            let e = extent();
            let b = bounds([i1.min(i2), i1.max(i2), j1.min(j2), j1.max(j2), k1.min(k2), k1.max(k2)]);
            let cb = CellBox::new(e, b).unwrap();
            let it = cb.iter();
            prop_assert_eq!(it.len(), cb.cell_count());
            let cells: Vec<_> = it.collect();
            prop_assert_eq!(cells.len(), cb.cell_count());
            let flat: Vec<usize> = cells.iter().map(|&(i, j, k)| e.flat_index(i, j, k).unwrap()).collect();
            prop_assert!(flat.windows(2).all(|w| w[0] < w[1]));
            for g in 0..e.cell_count() {
                let (i, j, k) = e.ijk(g).unwrap();
                prop_assert_eq!(cb.contains(i, j, k), flat.contains(&g));
            }
        }
    }
}
