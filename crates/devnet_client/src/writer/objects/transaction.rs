//! The declare transaction that can be added to the devnet via the gateway.
//!
//! The transaction serializes into the JSON object the gateway receives
//! through the `add_transaction` HTTP method.

#[cfg(test)]
#[path = "transaction_test.rs"]
mod transaction_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use starknet_api::core::{CompiledClassHash, ContractAddress, EntryPointSelector, Nonce};
use starknet_api::hash::StarkFelt;
use starknet_api::state::{EntryPoint, EntryPointType, FunctionIndex};
use starknet_api::transaction::{Fee, TransactionSignature, TransactionVersion};
use starknet_core::types::contract::SierraClass;
use starknet_core::types::SierraEntryPoint;

/// The type field of a declare transaction. This enum serializes/deserializes
/// into a constant string.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy, Eq, PartialEq)]
pub enum DeclareType {
    #[serde(rename = "DECLARE")]
    #[default]
    Declare,
}

/// A declare transaction of a Cairo-v1 contract class that can be added to the
/// devnet through its gateway.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DeclareV2Transaction {
    pub contract_class: ContractClass,
    pub compiled_class_hash: CompiledClassHash,
    pub sender_address: ContractAddress,
    pub nonce: Nonce,
    pub max_fee: Fee,
    pub version: TransactionVersion,
    pub signature: TransactionSignature,
    pub r#type: DeclareType,
}

/// A contract class in the serialization format the gateway accepts in
/// `add_transaction`: the sierra program is gzip-compressed and
/// base64-encoded, and the abi is the raw JSON string it hashes as.
#[derive(Debug, Clone, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct ContractClass {
    #[serde(rename = "sierra_program")]
    pub compressed_sierra_program: String,
    pub contract_class_version: String,
    pub entry_points_by_type: HashMap<EntryPointType, Vec<EntryPoint>>,
    pub abi: String,
}

/// Errors that may occur while building a [`ContractClass`] from a compiler
/// artifact.
#[derive(Debug, thiserror::Error)]
pub enum ContractClassError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

impl ContractClass {
    /// Builds the gateway serialization of `class`, compressing the sierra
    /// program.
    pub fn from_sierra(class: &SierraClass) -> Result<Self, ContractClassError> {
        let program_json = serde_json::Value::Array(
            class
                .sierra_program
                .iter()
                .map(|felt| serde_json::Value::String(format!("{felt:#x}")))
                .collect(),
        );
        let mut entry_points_by_type = HashMap::new();
        entry_points_by_type.insert(
            EntryPointType::Constructor,
            as_api_entry_points(&class.entry_points_by_type.constructor),
        );
        entry_points_by_type.insert(
            EntryPointType::External,
            as_api_entry_points(&class.entry_points_by_type.external),
        );
        entry_points_by_type.insert(
            EntryPointType::L1Handler,
            as_api_entry_points(&class.entry_points_by_type.l1_handler),
        );
        Ok(ContractClass {
            compressed_sierra_program: compress_and_encode(&program_json)?,
            contract_class_version: class.contract_class_version.clone(),
            entry_points_by_type,
            abi: serde_json::to_string(&class.abi)?,
        })
    }
}

fn as_api_entry_points(entry_points: &[SierraEntryPoint]) -> Vec<EntryPoint> {
    entry_points
        .iter()
        .map(|entry_point| EntryPoint {
            function_idx: FunctionIndex(entry_point.function_idx as usize),
            selector: EntryPointSelector(StarkFelt::from(entry_point.selector)),
        })
        .collect()
}

// Compress the value using gzip with the default compression level and encode
// it in base64.
fn compress_and_encode(value: &serde_json::Value) -> Result<String, std::io::Error> {
    let mut compressor = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    serde_json::to_writer(&mut compressor, value)?;
    let compressed_data = compressor.finish()?;
    Ok(base64::encode(compressed_data))
}
