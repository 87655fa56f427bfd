//! Sibling auxiliary files: per-row weights and group run-lengths.
//!
//! An auxiliary file holds one numeric value per line. A file that does not
//! exist, or exists but holds no values, contributes nothing; that is the
//! documented default, not an error. Length validation against the owning
//! source's row count happens in the merger, which knows the row count.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use std::str::FromStr;

use super::error::DatasetLoadError;

/// Read a one-value-per-line auxiliary file.
///
/// Returns `None` when the file does not exist or holds no values. Blank
/// lines are ignored; `\r\n` endings are tolerated. Any unparseable value
/// fails with [`DatasetLoadError::BadNumber`] naming the line.
pub(crate) fn read_aux_column<T: FromStr>(
    path: &Path,
) -> Result<Option<Vec<T>>, DatasetLoadError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(DatasetLoadError::io(path, e)),
    };

    let reader = BufReader::new(file);
    let mut values = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| DatasetLoadError::io(path, e))?;
        let field = line.trim();
        if field.is_empty() {
            continue;
        }
        let value = field
            .parse::<T>()
            .map_err(|_| DatasetLoadError::BadNumber {
                path: path.to_owned(),
                line: idx + 1,
                column: 1,
                value: field.to_owned(),
            })?;
        values.push(value);
    }

    Ok(if values.is_empty() { None } else { Some(values) })
}
