//! Dataset container produced by the ingestion merger.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use super::schema::TableSchema;

/// The merged, row-ordered dataset.
///
/// # Storage Layout
///
/// Features are stored in **feature-major** layout: `[n_features, n_samples]`.
/// Each feature's values across all samples are contiguous in memory.
///
/// Weights are always materialized; rows whose source had no sibling weight
/// file carry 1.0. The group vector holds run-lengths partitioning rows into
/// ranked groups and is empty when no source supplied a query file.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Feature data: `[n_features, n_samples]` (feature-major).
    features: Array2<f32>,

    /// One label per row (the first field of each source row).
    labels: Array1<f32>,

    /// One weight per row.
    weights: Array1<f32>,

    /// Group run-lengths, in source order. Empty when no query files.
    groups: Vec<u32>,

    /// Column names, when a header was present.
    schema: TableSchema,
}

impl Dataset {
    /// Assemble a dataset from already-validated parts.
    ///
    /// # Panics
    ///
    /// Debug-asserts that labels and weights match the sample count and
    /// that group run-lengths, when present, sum to the sample count.
    pub(crate) fn new(
        features: Array2<f32>,
        labels: Array1<f32>,
        weights: Array1<f32>,
        groups: Vec<u32>,
        schema: TableSchema,
    ) -> Self {
        let n_samples = features.ncols();
        debug_assert_eq!(labels.len(), n_samples, "one label per sample");
        debug_assert_eq!(weights.len(), n_samples, "one weight per sample");
        debug_assert!(
            groups.is_empty()
                || groups.iter().map(|&g| g as usize).sum::<usize>() == n_samples,
            "group run-lengths must sum to the sample count"
        );
        debug_assert_eq!(
            schema.n_features(),
            features.nrows(),
            "schema must describe every feature column"
        );

        Self {
            features,
            labels,
            weights,
            groups,
            schema,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of samples (rows).
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.features.ncols()
    }

    /// Number of feature columns (field count minus the label column).
    #[inline]
    pub fn n_features(&self) -> usize {
        self.features.nrows()
    }

    /// Per-row labels, in source order.
    #[inline]
    pub fn labels(&self) -> ArrayView1<'_, f32> {
        self.labels.view()
    }

    /// Per-row weights, in source order. 1.0 where no weight file applied.
    #[inline]
    pub fn weights(&self) -> ArrayView1<'_, f32> {
        self.weights.view()
    }

    /// Group run-lengths, in source order. Empty when no query files.
    #[inline]
    pub fn groups(&self) -> &[u32] {
        &self.groups
    }

    /// Whether any source supplied a query file.
    pub fn has_groups(&self) -> bool {
        !self.groups.is_empty()
    }

    /// Column names recorded from the header.
    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// The full feature matrix, `[n_features, n_samples]` (feature-major).
    pub fn features(&self) -> ArrayView2<'_, f32> {
        self.features.view()
    }

    /// All sample values for one feature. Contiguous.
    #[inline]
    pub fn feature(&self, feature: usize) -> ArrayView1<'_, f32> {
        self.features.row(feature)
    }

    /// All feature values for one sample.
    ///
    /// **Warning**: this is a strided view, not contiguous.
    #[inline]
    pub fn sample(&self, sample: usize) -> ArrayView1<'_, f32> {
        self.features.column(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn three_sample_dataset() -> Dataset {
        // 2 features, 3 samples, feature-major
        let features = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let labels = array![0.0, 1.0, 0.0];
        let weights = array![1.0, 1.0, 1.0];
        Dataset::new(features, labels, weights, vec![], TableSchema::all_unnamed(2))
    }

    #[test]
    fn accessors() {
        let ds = three_sample_dataset();

        assert_eq!(ds.n_samples(), 3);
        assert_eq!(ds.n_features(), 2);
        assert_eq!(ds.labels().to_vec(), vec![0.0, 1.0, 0.0]);
        assert_eq!(ds.weights().to_vec(), vec![1.0, 1.0, 1.0]);
        assert!(!ds.has_groups());
        assert!(ds.groups().is_empty());
    }

    #[test]
    fn feature_rows_are_contiguous() {
        let ds = three_sample_dataset();

        assert_eq!(ds.feature(0).to_vec(), vec![1.0, 2.0, 3.0]);
        assert_eq!(ds.feature(1).to_vec(), vec![4.0, 5.0, 6.0]);
        assert!(ds.feature(0).as_slice().is_some());
        assert!(ds.feature(1).as_slice().is_some());
    }

    #[test]
    fn sample_view_is_strided() {
        let ds = three_sample_dataset();
        assert_eq!(ds.sample(1).to_vec(), vec![2.0, 5.0]);
    }

    #[test]
    fn groups_sum_accepted() {
        let features = array![[1.0, 2.0, 3.0, 4.0]];
        let labels = array![0.0, 1.0, 0.0, 1.0];
        let weights = array![1.0, 1.0, 1.0, 1.0];
        let ds = Dataset::new(
            features,
            labels,
            weights,
            vec![2, 2],
            TableSchema::all_unnamed(1),
        );

        assert!(ds.has_groups());
        assert_eq!(ds.groups(), &[2, 2]);
    }

    // Verify Send + Sync
    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn dataset_is_send_sync() {
        assert_send_sync::<Dataset>();
    }
}
