//! Helpers for writing temporary datasets in loader tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Four binary rows reused across concatenation tests.
pub const FOUR_ROWS: &str = "1,0,1\n0,1,1\n0,1,0\n1,0,0\n";

/// Write a source file under `dir`.
pub fn write_source(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Write a sibling auxiliary file (`<path>.<suffix>`) next to `path`.
pub fn write_aux(path: &Path, suffix: &str, contents: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(suffix);
    let aux = PathBuf::from(name);
    fs::write(&aux, contents).unwrap();
    aux
}

/// Path spec repeating `path` `times` times, comma-joined.
pub fn repeat_spec(path: &Path, times: usize) -> String {
    vec![path.display().to_string(); times].join(",")
}
