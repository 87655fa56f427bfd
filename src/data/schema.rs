//! Column-name metadata for loaded tables.

use std::collections::HashMap;

/// Metadata for a single feature column.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnMeta {
    /// Column name from the header row, if one was present.
    pub name: Option<String>,
}

impl ColumnMeta {
    /// Metadata for a column without a name.
    pub fn unnamed() -> Self {
        Self { name: None }
    }

    /// Metadata for a named column.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Schema describing the columns of a merged table.
///
/// The first header field names the label column and is kept separately;
/// the remaining fields name the feature columns, in order. Header names
/// are informational only and never reorder columns.
#[derive(Clone, Debug, Default)]
pub struct TableSchema {
    /// Name of the label column, when a header was present.
    label_name: Option<String>,

    /// Per-feature metadata.
    features: Vec<ColumnMeta>,

    /// Feature name → index mapping (built lazily on first lookup).
    name_index: Option<HashMap<String, usize>>,
}

impl TableSchema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a schema with `n_features` unnamed columns.
    pub fn all_unnamed(n_features: usize) -> Self {
        Self {
            label_name: None,
            features: vec![ColumnMeta::unnamed(); n_features],
            name_index: None,
        }
    }

    /// Create a schema from a header row.
    ///
    /// The first field names the label column; the rest name features.
    pub fn from_header(fields: &[String]) -> Self {
        let label_name = fields.first().cloned();
        let features = fields
            .iter()
            .skip(1)
            .map(|name| ColumnMeta::named(name.clone()))
            .collect();
        Self {
            label_name,
            features,
            name_index: None,
        }
    }

    /// Number of feature columns in the schema.
    pub fn n_features(&self) -> usize {
        self.features.len()
    }

    /// Name of the label column, when a header was present.
    pub fn label_name(&self) -> Option<&str> {
        self.label_name.as_deref()
    }

    /// Get metadata for a feature column by index.
    pub fn get(&self, index: usize) -> Option<&ColumnMeta> {
        self.features.get(index)
    }

    /// Get feature index by name.
    ///
    /// Builds the name index on first call. Returns `None` if no feature
    /// has the given name.
    pub fn feature_index(&mut self, name: &str) -> Option<usize> {
        if self.name_index.is_none() {
            self.build_name_index();
        }
        self.name_index
            .as_ref()
            .and_then(|idx| idx.get(name).copied())
    }

    /// Get an iterator over feature metadata.
    pub fn iter(&self) -> impl Iterator<Item = &ColumnMeta> {
        self.features.iter()
    }

    fn build_name_index(&mut self) {
        let mut index = HashMap::new();
        for (i, meta) in self.features.iter().enumerate() {
            if let Some(ref name) = meta.name {
                index.insert(name.clone(), i);
            }
        }
        self.name_index = Some(index);
    }
}
