//! Per-source delimited row parsing.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::error::DatasetLoadError;

/// Fixed field delimiter.
const DELIMITER: char = ',';

/// Parse output for one source file.
#[derive(Debug)]
pub(crate) struct SourceBlock {
    /// Header names, consumed only when requested (first source).
    pub header: Option<Vec<String>>,

    /// Row-major feature values, `n_rows * (n_fields - 1)`.
    pub features: Vec<f32>,

    /// The first field of each row, in order.
    pub labels: Vec<f32>,

    /// Fields per row, label included.
    pub n_fields: usize,

    /// Data rows read (header excluded).
    pub n_rows: usize,
}

/// Stream one source file into a [`SourceBlock`].
///
/// When `read_header` is set, the first non-blank line is consumed as
/// column names and its field count becomes the expected count; otherwise
/// the first data row establishes it. Every subsequent row must match,
/// with mismatches reported against the 1-based physical line.
pub(crate) fn parse_source(
    path: &Path,
    read_header: bool,
) -> Result<SourceBlock, DatasetLoadError> {
    let file = File::open(path).map_err(|e| DatasetLoadError::io(path, e))?;
    let reader = BufReader::new(file);

    let mut want_header = read_header;
    let mut header = None;
    let mut expected: Option<usize> = None;
    let mut labels = Vec::new();
    let mut features = Vec::new();
    let mut n_rows = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| DatasetLoadError::io(path, e))?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let lineno = idx + 1;

        if want_header {
            let names: Vec<String> = line.split(DELIMITER).map(str::to_owned).collect();
            expected = Some(names.len());
            header = Some(names);
            want_header = false;
            continue;
        }

        let fields: Vec<&str> = line.split(DELIMITER).collect();
        match expected {
            None => expected = Some(fields.len()),
            Some(count) if count != fields.len() => {
                return Err(DatasetLoadError::FieldCount {
                    path: path.to_owned(),
                    line: lineno,
                    expected: count,
                    got: fields.len(),
                });
            }
            Some(_) => {}
        }

        for (col, field) in fields.iter().enumerate() {
            let value = parse_field(path, lineno, col, field)?;
            if col == 0 {
                labels.push(value);
            } else {
                features.push(value);
            }
        }
        n_rows += 1;
    }

    if n_rows == 0 {
        return Err(DatasetLoadError::EmptyTable {
            path: path.to_owned(),
        });
    }

    Ok(SourceBlock {
        header,
        features,
        labels,
        // expected is always set once a data row was read
        n_fields: expected.unwrap_or(0),
        n_rows,
    })
}

fn parse_field(
    path: &Path,
    line: usize,
    col: usize,
    field: &str,
) -> Result<f32, DatasetLoadError> {
    field
        .trim()
        .parse::<f32>()
        .map_err(|_| DatasetLoadError::BadNumber {
            path: path.to_owned(),
            line,
            column: col + 1,
            value: field.to_owned(),
        })
}
