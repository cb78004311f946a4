//! The response objects of the gateway's `add_transaction` endpoint.

use serde::{Deserialize, Serialize};
use starknet_api::transaction::TransactionHash;

/// The response returned by the gateway on a successful `add_transaction` call
/// for a declare transaction.
#[derive(Debug, Deserialize, Serialize, Clone, Eq, PartialEq)]
pub struct DeclareResponse {
    /// Acknowledgement code, e.g. `TRANSACTION_RECEIVED`. Not all devnets
    /// send one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub transaction_hash: TransactionHash,
}
