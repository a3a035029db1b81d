//! Dense per-cell property storage.

use crate::error::{EditError, GridError};
use crate::extent::GridExtent;
use crate::scalar::{Scalar, ScalarKind};

/// One value of type `T` per grid cell, stored in flat-index order.
///
/// The length is fixed at construction. The `(i, j, k)` accessors are thin
/// wrappers over [`GridExtent::flat_index`].
///
/// # Examples
///
/// ```
/// use strata_core::{GridExtent, PropertyField};
///
/// let extent = GridExtent::new(2, 2, 2).unwrap();
/// let mut satnum = PropertyField::filled(extent, 1i32);
/// satnum.set(1, 1, 0, 10).unwrap();
/// assert_eq!(satnum.get(1, 1, 0).unwrap(), 10);
/// assert_eq!(satnum.get_flat(3).unwrap(), 10);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyField<T> {
    extent: GridExtent,
    values: Vec<T>,
}

impl<T: Scalar> PropertyField<T> {
    /// A field holding `value` in every cell.
    pub fn filled(extent: GridExtent, value: T) -> Self {
        Self {
            extent,
            values: vec![value; extent.cell_count()],
        }
    }

    /// Wrap an existing buffer. Its length must equal the cell count.
    pub fn from_values(extent: GridExtent, values: Vec<T>) -> Result<Self, GridError> {
        if values.len() != extent.cell_count() {
            return Err(GridError::LengthMismatch {
                expected: extent.cell_count(),
                found: values.len(),
            });
        }
        Ok(Self { extent, values })
    }

    /// The extent this field is laid out on.
    pub fn extent(&self) -> GridExtent {
        self.extent
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: extents reject zero dimensions.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Value at `(i, j, k)`.
    pub fn get(&self, i: usize, j: usize, k: usize) -> Result<T, GridError> {
        let g = self.extent.flat_index(i, j, k)?;
        Ok(self.values[g])
    }

    /// Value at flat index `g`.
    pub fn get_flat(&self, g: usize) -> Result<T, GridError> {
        self.values
            .get(g)
            .copied()
            .ok_or(GridError::FlatOutOfBounds {
                index: g,
                cell_count: self.values.len(),
            })
    }

    /// Overwrite the value at `(i, j, k)`.
    pub fn set(&mut self, i: usize, j: usize, k: usize, value: T) -> Result<(), GridError> {
        let g = self.extent.flat_index(i, j, k)?;
        self.values[g] = value;
        Ok(())
    }

    /// Overwrite the value at flat index `g`.
    pub fn set_flat(&mut self, g: usize, value: T) -> Result<(), GridError> {
        let cell_count = self.values.len();
        let slot = self.values.get_mut(g).ok_or(GridError::FlatOutOfBounds {
            index: g,
            cell_count,
        })?;
        *slot = value;
        Ok(())
    }

    /// All values in flat-index order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.values.fill(value);
    }
}

/// A named deck property: either integer- or double-valued.
#[derive(Clone, Debug, PartialEq)]
pub enum Property {
    /// Integer property such as `SATNUM`.
    Int(PropertyField<i32>),
    /// Double property such as `PERMX`.
    Double(PropertyField<f64>),
}

impl Property {
    /// The scalar kind of this property.
    pub fn kind(&self) -> ScalarKind {
        match self {
            Self::Int(_) => ScalarKind::Int,
            Self::Double(_) => ScalarKind::Double,
        }
    }

    /// The extent the property is laid out on.
    pub fn extent(&self) -> GridExtent {
        match self {
            Self::Int(f) => f.extent(),
            Self::Double(f) => f.extent(),
        }
    }

    /// Value at flat index `g`, widened to `f64`.
    pub fn get_f64(&self, g: usize) -> Result<f64, GridError> {
        match self {
            Self::Int(f) => f.get_flat(g).map(Scalar::to_f64),
            Self::Double(f) => f.get_flat(g),
        }
    }

    /// Store `value` at flat index `g`, rejecting values the kind cannot
    /// hold exactly.
    pub fn set_f64(&mut self, g: usize, value: f64) -> Result<(), EditError> {
        match self {
            Self::Int(f) => {
                if !i32::represents(value) {
                    return Err(EditError::TypeMismatch {
                        reason: format!("{value} is not a valid integer property value"),
                    });
                }
                f.set_flat(g, i32::from_f64(value))?;
            }
            Self::Double(f) => f.set_flat(g, value)?,
        }
        Ok(())
    }

    /// Borrow as an integer field, if it is one.
    pub fn as_int(&self) -> Option<&PropertyField<i32>> {
        match self {
            Self::Int(f) => Some(f),
            Self::Double(_) => None,
        }
    }

    /// Borrow as a double field, if it is one.
    pub fn as_double(&self) -> Option<&PropertyField<f64>> {
        match self {
            Self::Double(f) => Some(f),
            Self::Int(_) => None,
        }
    }
}
