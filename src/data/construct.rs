//! Dataset construction boundary.
//!
//! The merger stops at a [`MergedTable`]; compiling that into an engine's
//! internal representation is the job of a [`ConstructDataset`]
//! implementation. [`InMemoryConstruct`] is the provided implementation and
//! builds the in-memory [`Dataset`] container.

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use super::dataset::Dataset;
use super::io::DatasetLoadError;
use super::schema::TableSchema;

/// Everything the merger knows about the parsed data, in parse order.
///
/// Features are row-major here (`[n_samples, n_features]`); constructors
/// pick their own layout.
#[derive(Debug, Clone)]
pub struct MergedTable {
    /// Feature values, `[n_samples, n_features]`, sources concatenated in
    /// the order they were given.
    pub features: Array2<f32>,

    /// One label per row (the first field of each row).
    pub labels: Array1<f32>,

    /// One weight per row; 1.0 where no weight file supplied one.
    pub weights: Array1<f32>,

    /// Group run-lengths, concatenated in source order.
    pub groups: Vec<u32>,

    /// Column names from the header, when one was present.
    pub schema: TableSchema,
}

impl MergedTable {
    /// Number of rows across all sources.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    /// Number of feature columns.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }
}

/// Knobs forwarded untouched to the construction step.
///
/// The merger never interprets these; they belong to whatever compiles the
/// merged table into its internal representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstructParams {
    pub min_data: usize,
    pub min_data_in_bin: usize,
}

impl Default for ConstructParams {
    fn default() -> Self {
        Self {
            min_data: 20,
            min_data_in_bin: 3,
        }
    }
}

/// The construction step that turns a merged table into a dataset handle.
///
/// Implement this to hand merged rows to an external engine. The loader
/// calls `construct` exactly once per successful merge.
pub trait ConstructDataset {
    /// The dataset handle this constructor produces.
    type Output;

    /// Compile the merged table.
    fn construct(
        &self,
        table: MergedTable,
        params: &ConstructParams,
    ) -> Result<Self::Output, DatasetLoadError>;
}

/// In-memory constructor.
///
/// Transposes the row-major parse output into the feature-major layout
/// [`Dataset`] stores. Construction knobs are accepted but have no effect
/// on the in-memory container.
#[derive(Debug, Clone, Copy, Default)]
pub struct InMemoryConstruct;

impl ConstructDataset for InMemoryConstruct {
    type Output = Dataset;

    fn construct(
        &self,
        table: MergedTable,
        _params: &ConstructParams,
    ) -> Result<Dataset, DatasetLoadError> {
        let MergedTable {
            features,
            labels,
            weights,
            groups,
            schema,
        } = table;

        // [n_samples, n_features] -> [n_features, n_samples], with each
        // feature row contiguous.
        let features = features.reversed_axes().as_standard_layout().to_owned();

        Ok(Dataset::new(features, labels, weights, groups, schema))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn sample_table() -> MergedTable {
        MergedTable {
            // 3 samples, 2 features, row-major
            features: array![[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]],
            labels: array![0.0, 1.0, 0.0],
            weights: array![1.0, 1.0, 1.0],
            groups: vec![],
            schema: TableSchema::all_unnamed(2),
        }
    }

    #[test]
    fn in_memory_construct_transposes() {
        let ds = InMemoryConstruct
            .construct(sample_table(), &ConstructParams::default())
            .unwrap();

        assert_eq!(ds.n_samples(), 3);
        assert_eq!(ds.n_features(), 2);
        assert_eq!(ds.feature(0).to_vec(), vec![1.0, 2.0, 3.0]);
        assert_eq!(ds.feature(1).to_vec(), vec![4.0, 5.0, 6.0]);
        assert!(ds.feature(0).as_slice().is_some());
    }

    #[test]
    fn construct_params_default() {
        let params = ConstructParams::default();
        assert_eq!(params.min_data, 20);
        assert_eq!(params.min_data_in_bin, 3);
    }

    #[test]
    fn construct_params_deserialize_partial() {
        let params: ConstructParams = serde_json::from_str(r#"{"min_data": 1}"#).unwrap();
        assert_eq!(params.min_data, 1);
        assert_eq!(params.min_data_in_bin, 3);
    }

    #[test]
    fn merged_table_shape() {
        let table = sample_table();
        assert_eq!(table.n_samples(), 3);
        assert_eq!(table.n_features(), 2);
    }
}
