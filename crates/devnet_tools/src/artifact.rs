//! Loading of compiled-contract artifacts from disk.

#[cfg(test)]
#[path = "artifact_test.rs"]
mod artifact_test;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use starknet_core::types::contract::{CompiledClass, SierraClass};

// The casm compilation of an artifact lives next to its sierra file, with
// only the extension differing.
const CASM_EXTENSION: &str = "casm";

/// A compiled-contract artifact pair as produced by the compiler: the sierra
/// class and its casm compilation.
#[derive(Debug)]
pub struct ContractArtifact {
    pub sierra: SierraClass,
    pub casm: CompiledClass,
}

/// Errors raised while loading artifacts from disk.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

impl ContractArtifact {
    /// Loads the pair `<path>` (sierra) and `<path with .casm>`.
    pub fn load(sierra_path: &Path) -> Result<Self, ArtifactError> {
        Ok(ContractArtifact {
            sierra: load_sierra(sierra_path)?,
            casm: read_artifact(&sierra_path.with_extension(CASM_EXTENSION))?,
        })
    }
}

/// Loads a sierra contract class artifact.
pub fn load_sierra(path: &Path) -> Result<SierraClass, ArtifactError> {
    read_artifact(path)
}

fn read_artifact<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
