//! Helpers shared by the workspace's tests.

#![allow(clippy::unwrap_used)]

use std::env;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

/// Returns the absolute path of a file from its path relative to the
/// workspace root.
pub fn get_absolute_path(relative_path: &str) -> PathBuf {
    Path::new(&env::var("CARGO_MANIFEST_DIR").unwrap()).join("../..").join(relative_path)
}

/// Reads a JSON file from its path relative to the workspace root.
pub fn read_json_file(relative_path: &str) -> serde_json::Value {
    let path = get_absolute_path(relative_path);
    let json_str = read_to_string(path.to_str().unwrap()).unwrap();
    serde_json::from_str(&json_str).unwrap()
}
