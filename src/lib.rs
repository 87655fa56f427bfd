//! tabload: delimited-text ingestion for gradient boosting datasets.
//!
//! This crate parses comma-separated training files, optionally several of
//! them concatenated in order, attaches per-row metadata from sibling
//! `.weight` and `.query` files, and merges everything into a single
//! row-ordered [`data::Dataset`].
//!
//! ```no_run
//! use tabload::data::io::{load_text_to_dataset, LoadOptions};
//!
//! let options = LoadOptions {
//!     has_header: true,
//!     ..LoadOptions::default()
//! };
//! let ds = load_text_to_dataset("train.csv,train_extra.csv", &options)?;
//! println!("{} features over {} rows", ds.n_features(), ds.n_samples());
//! # Ok::<(), tabload::data::io::DatasetLoadError>(())
//! ```

pub mod data;
