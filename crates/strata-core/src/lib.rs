//! Core types for the strata deck property engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! grid extent and its flat-index bijection, the per-cell property field
//! storage, and the error taxonomy shared by every other strata crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod extent;
pub mod field;
pub mod scalar;

pub use error::{EditError, GridError};
pub use extent::GridExtent;
pub use field::{Property, PropertyField};
pub use scalar::{Scalar, ScalarKind};
