use std::fs::read_to_string;
use std::path::Path;

/// Reads a file from the crate's resources directory.
pub(crate) fn read_resource_file(path_in_resource_dir: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("resources").join(path_in_resource_dir);
    read_to_string(path).unwrap()
}
