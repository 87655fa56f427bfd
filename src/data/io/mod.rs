//! Delimited-text ingestion.
//!
//! # Overview
//!
//! [`load_text_to_dataset`] reads one or more comma-separated text files
//! into a single row-ordered [`Dataset`]:
//!
//! - Sources are given as a comma-joined path spec (`"a.csv,b.csv"`) or an
//!   explicit [`SourceList`], and are concatenated in the given order.
//!   Repeating a path repeats its rows.
//! - The first field of every row is the label; the rest are features.
//! - With [`LoadOptions::has_header`], the first row of the *first* source
//!   is consumed as column names; sources after the first never carry a
//!   header.
//! - Each source is independently paired with optional sibling files:
//!   `<path>.weight` (one weight per row) and `<path>.query` (group
//!   run-lengths summing to the source's row count).
//!
//! # Concurrency
//!
//! Sources are parsed in parallel: each source's rows and aux files are
//! disjoint from every other source's, and the ordered collect at the
//! merge barrier restores concatenation order. Any error aborts the whole
//! load; no partial dataset is returned.

mod aux;
mod error;
mod sources;
mod text;

pub use error::DatasetLoadError;
pub use sources::SourceList;

use std::path::Path;

use ndarray::{Array1, Array2};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::construct::{ConstructDataset, ConstructParams, InMemoryConstruct, MergedTable};
use super::dataset::Dataset;
use super::schema::TableSchema;
use aux::read_aux_column;
use sources::{aux_path, QUERY_SUFFIX, WEIGHT_SUFFIX};
use text::{parse_source, SourceBlock};

/// Options controlling a text load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Treat the first row of the first source as column names.
    pub has_header: bool,

    /// Forwarded untouched to the construction step.
    pub min_data: usize,

    /// Forwarded untouched to the construction step.
    pub min_data_in_bin: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        let params = ConstructParams::default();
        Self {
            has_header: false,
            min_data: params.min_data,
            min_data_in_bin: params.min_data_in_bin,
        }
    }
}

impl LoadOptions {
    fn construct_params(&self) -> ConstructParams {
        ConstructParams {
            min_data: self.min_data,
            min_data_in_bin: self.min_data_in_bin,
        }
    }
}

/// Load one or more delimited text files into a [`Dataset`].
///
/// `spec` is a comma-joined path spec; see the module docs for the file
/// and sibling-file conventions.
pub fn load_text_to_dataset(
    spec: &str,
    options: &LoadOptions,
) -> Result<Dataset, DatasetLoadError> {
    load_text_with(&SourceList::parse(spec), options, &InMemoryConstruct)
}

/// Load through a caller-supplied construction step.
///
/// The merger produces a [`MergedTable`] and hands it, together with the
/// pass-through [`ConstructParams`], to `constructor`.
pub fn load_text_with<C: ConstructDataset>(
    sources: &SourceList,
    options: &LoadOptions,
    constructor: &C,
) -> Result<C::Output, DatasetLoadError> {
    let table = merge_sources(sources, options)?;
    constructor.construct(table, &options.construct_params())
}

/// One source's parse output plus its aux columns, already validated
/// against the source's own row count.
struct Segment {
    block: SourceBlock,
    weights: Option<Vec<f32>>,
    groups: Option<Vec<u32>>,
}

fn merge_sources(
    sources: &SourceList,
    options: &LoadOptions,
) -> Result<MergedTable, DatasetLoadError> {
    let paths = sources.paths();
    if paths.is_empty() {
        return Err(DatasetLoadError::EmptySourceList);
    }

    // Each source is self-contained (own rows, own aux files), so the
    // fan-out is safe; the indexed collect restores source order.
    let segments: Vec<Segment> = if paths.len() == 1 {
        vec![load_segment(&paths[0], options.has_header)?]
    } else {
        paths
            .par_iter()
            .enumerate()
            .map(|(i, path)| load_segment(path, options.has_header && i == 0))
            .collect::<Result<Vec<_>, _>>()?
    };

    // Every source must agree with the first source's field count. Each
    // source is already internally consistent, so a mismatch is visible
    // from its first data row.
    let n_fields = segments[0].block.n_fields;
    for (path, segment) in paths.iter().zip(&segments).skip(1) {
        if segment.block.n_fields != n_fields {
            return Err(DatasetLoadError::FieldCount {
                path: path.clone(),
                line: 1,
                expected: n_fields,
                got: segment.block.n_fields,
            });
        }
    }

    let n_features = n_fields - 1;
    let n_rows: usize = segments.iter().map(|s| s.block.n_rows).sum();

    let mut features = Vec::with_capacity(n_rows * n_features);
    let mut labels = Vec::with_capacity(n_rows);
    let mut weights = Vec::with_capacity(n_rows);
    let mut groups = Vec::new();
    let mut schema = TableSchema::all_unnamed(n_features);

    for segment in segments {
        let rows = segment.block.n_rows;
        if let Some(names) = segment.block.header {
            schema = TableSchema::from_header(&names);
        }
        features.extend(segment.block.features);
        labels.extend(segment.block.labels);
        match segment.weights {
            Some(w) => weights.extend(w),
            None => weights.extend(std::iter::repeat(1.0).take(rows)),
        }
        if let Some(g) = segment.groups {
            groups.extend(g);
        }
    }

    let features = Array2::from_shape_vec((n_rows, n_features), features)
        .expect("per-row validation fixes the element count");

    Ok(MergedTable {
        features,
        labels: Array1::from_vec(labels),
        weights: Array1::from_vec(weights),
        groups,
        schema,
    })
}

/// Parse one source and its sibling aux files.
///
/// Aux files are looked up per call, so a path repeated in the source list
/// re-reads its siblings once per occurrence.
fn load_segment(path: &Path, read_header: bool) -> Result<Segment, DatasetLoadError> {
    let block = parse_source(path, read_header)?;

    let weight_path = aux_path(path, WEIGHT_SUFFIX);
    let weights = read_aux_column::<f32>(&weight_path)?;
    if let Some(ref w) = weights {
        if w.len() != block.n_rows {
            return Err(DatasetLoadError::WeightLength {
                path: weight_path,
                expected: block.n_rows,
                got: w.len(),
            });
        }
    }

    let query_path = aux_path(path, QUERY_SUFFIX);
    let groups = read_aux_column::<u32>(&query_path)?;
    if let Some(ref g) = groups {
        let sum: usize = g.iter().map(|&v| v as usize).sum();
        if sum != block.n_rows {
            return Err(DatasetLoadError::GroupSum {
                path: query_path,
                expected: block.n_rows,
                got: sum,
            });
        }
    }

    Ok(Segment {
        block,
        weights,
        groups,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn opts() -> LoadOptions {
        LoadOptions {
            min_data: 1,
            min_data_in_bin: 1,
            ..LoadOptions::default()
        }
    }

    #[test]
    fn merges_two_sources_in_order() {
        let dir = TempDir::new().unwrap();
        let a = write(&dir, "a.csv", "1,10,20\n0,30,40\n");
        let b = write(&dir, "b.csv", "0,50,60\n");
        let spec = format!("{},{}", a.display(), b.display());

        let ds = load_text_to_dataset(&spec, &opts()).unwrap();

        assert_eq!(ds.n_samples(), 3);
        assert_eq!(ds.n_features(), 2);
        assert_eq!(ds.labels().to_vec(), vec![1.0, 0.0, 0.0]);
        assert_eq!(ds.feature(0).to_vec(), vec![10.0, 30.0, 50.0]);
        assert_eq!(ds.feature(1).to_vec(), vec![20.0, 40.0, 60.0]);
    }

    #[test]
    fn empty_source_list_errors() {
        assert!(matches!(
            load_text_to_dataset("", &opts()),
            Err(DatasetLoadError::EmptySourceList)
        ));
        assert!(matches!(
            load_text_to_dataset(",,", &opts()),
            Err(DatasetLoadError::EmptySourceList)
        ));
    }

    #[test]
    fn cross_source_field_count_mismatch_names_source() {
        let dir = TempDir::new().unwrap();
        let a = write(&dir, "a.csv", "1,0,1\n");
        let b = write(&dir, "b.csv", "1,0\n0,1\n");
        let spec = format!("{},{}", a.display(), b.display());

        match load_text_to_dataset(&spec, &opts()).unwrap_err() {
            DatasetLoadError::FieldCount {
                path,
                expected,
                got,
                ..
            } => {
                assert_eq!(path, b);
                assert_eq!(expected, 3);
                assert_eq!(got, 2);
            }
            other => panic!("expected FieldCount, got {other:?}"),
        }
    }

    #[test]
    fn options_deserialize_from_params_bag() {
        let options: LoadOptions =
            serde_json::from_str(r#"{"has_header": true, "min_data": 1, "min_data_in_bin": 1}"#)
                .unwrap();
        assert!(options.has_header);
        assert_eq!(options.min_data, 1);
        assert_eq!(options.min_data_in_bin, 1);

        let partial: LoadOptions = serde_json::from_str(r#"{"has_header": true}"#).unwrap();
        assert!(partial.has_header);
        assert_eq!(partial.min_data, LoadOptions::default().min_data);
    }
}
