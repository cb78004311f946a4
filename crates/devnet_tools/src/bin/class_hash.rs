use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use devnet_tools::artifact::load_sierra;
use devnet_tools::crypto::{ClassHasher, StarkClassHasher};
use starknet_crypto::FieldElement;

/// Prints the class hash of a sierra contract class artifact.
#[derive(Parser, Debug)]
#[command(name = "class_hash", about = "Prints the class hash of a sierra artifact.")]
struct ClassHashArgs {
    /// Path to the artifact JSON file.
    artifact_path: PathBuf,
}

fn main() -> Result<()> {
    let args = ClassHashArgs::parse();
    let sierra = load_sierra(&args.artifact_path)?;
    let class_hash = StarkClassHasher.class_hash(&sierra)?;
    println!("{:#x}", FieldElement::from(class_hash.0));
    Ok(())
}
