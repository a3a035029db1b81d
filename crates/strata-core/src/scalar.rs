//! Per-cell scalar kinds and explicit conversion to and from `f64`.

use std::fmt;

/// The two value kinds a deck property can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Region indices and flags (`SATNUM`, `FIPNUM`, ...).
    Int,
    /// Continuous rock properties (`PORO`, `PERMX`, `NTG`, ...).
    Double,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "integer"),
            Self::Double => write!(f, "double"),
        }
    }
}

/// A value type storable in a [`PropertyField`](crate::PropertyField).
///
/// Operators do their arithmetic in `f64` and convert back through
/// [`from_f64`](Self::from_f64). There is no implicit coercion between
/// kinds anywhere else.
pub trait Scalar: Copy + PartialEq + PartialOrd + fmt::Debug + Send + Sync + 'static {
    /// The kind tag for this type.
    const KIND: ScalarKind;

    /// Widen to `f64`.
    fn to_f64(self) -> f64;

    /// Narrow from `f64`. Integer kinds truncate toward zero and saturate.
    fn from_f64(value: f64) -> Self;

    /// Whether `value` converts without loss.
    fn represents(value: f64) -> bool;
}

impl Scalar for i32 {
    const KIND: ScalarKind = ScalarKind::Int;

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn from_f64(value: f64) -> Self {
        value as i32
    }

    fn represents(value: f64) -> bool {
        value.fract() == 0.0 && value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX)
    }
}

impl Scalar for f64 {
    const KIND: ScalarKind = ScalarKind::Double;

    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn represents(_value: f64) -> bool {
        true
    }
}
