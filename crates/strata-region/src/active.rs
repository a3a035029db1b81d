//! The `BOX` / `ENDBOX` state machine.

use tracing::trace;

use strata_core::{EditError, GridExtent};

use crate::bounds::{BoxBounds, IndexBase};
use crate::cell_box::{CellBox, CellIter};

/// Which cells edits currently apply to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionState {
    /// The whole grid. Initial state, and the state after a reset.
    Full,
    /// The box set by the most recent `BOX` record.
    Restricted(CellBox),
}

/// The current region of a keyword-processing pass.
///
/// Starts [`Full`](RegionState::Full). A `BOX` record replaces the state
/// wholesale (boxes never intersect or accumulate); `ENDBOX` and section
/// boundaries reset it. Transitions validate before committing: a failed
/// [`apply_box_record`](Self::apply_box_record) leaves the previous state
/// in place.
///
/// # Examples
///
/// ```
/// use strata_core::GridExtent;
/// use strata_region::{ActiveRegion, BoxBounds, IndexBase};
///
/// let extent = GridExtent::new(10, 10, 3).unwrap();
/// let mut region = ActiveRegion::new(extent, IndexBase::One);
/// assert_eq!(region.current().cell_count(), 300);
///
/// region.apply_box_record(BoxBounds::from_array([1, 2, 1, 2, 1, 2])).unwrap();
/// assert_eq!(region.current().cell_count(), 8);
///
/// // Out of extent: rejected, previous box kept.
/// assert!(region.apply_box_record(BoxBounds::from_array([1, 11, 1, 2, 1, 2])).is_err());
/// assert_eq!(region.current().cell_count(), 8);
///
/// region.reset_to_full();
/// assert!(region.is_full());
/// ```
#[derive(Clone, Debug)]
pub struct ActiveRegion {
    extent: GridExtent,
    base: IndexBase,
    state: RegionState,
}

impl ActiveRegion {
    /// A full-grid region over `extent`; deck bounds are read in `base`.
    pub fn new(extent: GridExtent, base: IndexBase) -> Self {
        Self {
            extent,
            base,
            state: RegionState::Full,
        }
    }

    /// The grid extent.
    pub fn extent(&self) -> GridExtent {
        self.extent
    }

    /// Index base used to interpret deck bounds.
    pub fn index_base(&self) -> IndexBase {
        self.base
    }

    /// The current state.
    pub fn state(&self) -> RegionState {
        self.state
    }

    /// Whether no `BOX` is in effect.
    pub fn is_full(&self) -> bool {
        self.state == RegionState::Full
    }

    /// Validate deck `bounds` (in this region's index base) into a box.
    ///
    /// Does not change state; used for both `BOX` records and per-record
    /// boxes on edit keywords.
    pub fn box_from_deck(&self, bounds: BoxBounds) -> Result<CellBox, EditError> {
        CellBox::new(self.extent, bounds.normalize(self.base))
    }

    /// Replace the current region with `bounds`.
    pub fn apply_box_record(&mut self, bounds: BoxBounds) -> Result<(), EditError> {
        let cell_box = self.box_from_deck(bounds)?;
        trace!(%bounds, cells = cell_box.cell_count(), "box set");
        self.state = RegionState::Restricted(cell_box);
        Ok(())
    }

    /// Return to the full grid.
    pub fn reset_to_full(&mut self) {
        if !self.is_full() {
            trace!("box reset to full grid");
        }
        self.state = RegionState::Full;
    }

    /// The effective box: the `BOX` in force, or the full grid.
    pub fn current(&self) -> CellBox {
        match self.state {
            RegionState::Full => CellBox::full(self.extent),
            RegionState::Restricted(b) => b,
        }
    }

    /// The box a single record applies to: its own bounds when given,
    /// otherwise [`current`](Self::current). Never changes state.
    pub fn resolve(&self, record_bounds: Option<BoxBounds>) -> Result<CellBox, EditError> {
        match record_bounds {
            Some(bounds) => self.box_from_deck(bounds),
            None => Ok(self.current()),
        }
    }

    /// Cells of the current region, i fastest.
    pub fn iter_cells(&self) -> CellIter {
        self.current().iter()
    }
}
