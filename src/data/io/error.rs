//! Shared error types for dataset ingestion.

use std::io;
use std::path::PathBuf;

/// Errors that can occur when loading a delimited-text dataset.
///
/// Every variant names the file it arose from; structural problems also
/// carry 1-based line (and column) positions. Any error aborts the whole
/// merge; no partial dataset is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum DatasetLoadError {
    /// A source or auxiliary file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The path spec contained no non-empty source paths.
    #[error("source list is empty")]
    EmptySourceList,

    /// A source file contributed no data rows.
    #[error("{}: no data rows", path.display())]
    EmptyTable { path: PathBuf },

    /// A row's field count differs from the established count.
    #[error("{}:{line}: expected {expected} fields, got {got}", path.display())]
    FieldCount {
        path: PathBuf,
        line: usize,
        expected: usize,
        got: usize,
    },

    /// A field could not be parsed as a number.
    #[error("{}:{line}: column {column}: invalid number {value:?}", path.display())]
    BadNumber {
        path: PathBuf,
        line: usize,
        column: usize,
        value: String,
    },

    /// A weight file's value count does not match its source's row count.
    #[error("{}: expected {expected} weights, got {got}", path.display())]
    WeightLength {
        path: PathBuf,
        expected: usize,
        got: usize,
    },

    /// A query file's run-lengths do not sum to its source's row count.
    #[error("{}: group run-lengths sum to {got}, expected {expected}", path.display())]
    GroupSum {
        path: PathBuf,
        expected: usize,
        got: usize,
    },

    /// The construction step rejected the merged table.
    #[error("dataset construction failed: {0}")]
    Construct(String),
}

impl DatasetLoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
