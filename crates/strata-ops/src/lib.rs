//! Region-scoped property operators.
//!
//! [`RegionOperator`] is the closed set of per-cell transformations the
//! edit keywords (`EQUALS`, `COPY`, `MULTIPLY`, `ADD`, `MINVALUE`,
//! `MAXVALUE`, `OPERATE`) perform. Each applies to exactly the cells of a
//! [`CellBox`](strata_region::CellBox) and leaves every other cell alone.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod operate;
pub mod operator;

pub use operate::OperateFn;
pub use operator::RegionOperator;
