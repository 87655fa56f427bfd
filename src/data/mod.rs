//! Dataset types and text ingestion.
//!
//! # Overview
//!
//! [`io`] turns one or more delimited text files into a [`MergedTable`]:
//! a row-major bundle of feature values, labels, per-row weights, and
//! group run-lengths. A [`ConstructDataset`] implementation then compiles
//! that bundle into an engine-specific representation; the provided
//! [`InMemoryConstruct`] builds the in-memory [`Dataset`] container.
//!
//! # Storage layout
//!
//! [`Dataset`] stores features **feature-major**: `[n_features, n_samples]`.
//! Each feature's values across all samples are contiguous, which is the
//! access pattern histogram-based training wants.

mod construct;
mod dataset;
mod schema;

pub mod io;

pub use construct::{ConstructDataset, ConstructParams, InMemoryConstruct, MergedTable};
pub use dataset::Dataset;
pub use schema::{ColumnMeta, TableSchema};
