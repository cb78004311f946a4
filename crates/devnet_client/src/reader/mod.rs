//! This module contains a client that can read data from the devnet's feeder
//! gateway.

#[cfg(test)]
#[path = "feeder_gateway_client_test.rs"]
mod feeder_gateway_client_test;

use async_trait::async_trait;
use serde::Serialize;
use starknet_api::core::{ClassHash, ContractAddress, Nonce};
use starknet_api::transaction::TransactionHash;
use tracing::{debug, instrument};
use url::Url;

use crate::{ClientCreationError, ClientResult, DevnetClient};

/// A trait describing an object that can read data from the devnet's feeder
/// gateway.
#[async_trait]
pub trait FeederGatewayReader {
    /// Returns the current nonce of the account at `contract_address`.
    async fn nonce(&self, contract_address: ContractAddress) -> ClientResult<Nonce>;
    /// Returns the contract class declared under `class_hash`, as raw JSON.
    async fn class_by_hash(&self, class_hash: ClassHash) -> ClientResult<serde_json::Value>;
    /// Returns the compiled class stored under `class_hash`, as raw JSON.
    async fn compiled_class_by_hash(
        &self,
        class_hash: ClassHash,
    ) -> ClientResult<serde_json::Value>;
    /// Returns the transaction with hash `transaction_hash`, as raw JSON.
    async fn transaction(&self, transaction_hash: TransactionHash)
        -> ClientResult<serde_json::Value>;
    /// Returns the receipt of the transaction with hash `transaction_hash`, as
    /// raw JSON.
    async fn transaction_receipt(
        &self,
        transaction_hash: TransactionHash,
    ) -> ClientResult<serde_json::Value>;
}

/// A client for the devnet's feeder gateway.
pub struct FeederGatewayClient {
    urls: FeederGatewayUrls,
    client: DevnetClient,
}

#[derive(Clone, Debug)]
struct FeederGatewayUrls {
    get_nonce: Url,
    get_class_by_hash: Url,
    get_compiled_class_by_hash: Url,
    get_transaction: Url,
    get_transaction_receipt: Url,
}

const GET_NONCE_URL: &str = "feeder_gateway/get_nonce";
const GET_CLASS_BY_HASH_URL: &str = "feeder_gateway/get_class_by_hash";
const GET_COMPILED_CLASS_BY_HASH_URL: &str = "feeder_gateway/get_compiled_class_by_hash";
const GET_TRANSACTION_URL: &str = "feeder_gateway/get_transaction";
const GET_TRANSACTION_RECEIPT_URL: &str = "feeder_gateway/get_transaction_receipt";
const CONTRACT_ADDRESS_QUERY: &str = "contractAddress";
const CLASS_HASH_QUERY: &str = "classHash";
const TRANSACTION_HASH_QUERY: &str = "transactionHash";

impl FeederGatewayUrls {
    fn new(url_str: &str) -> Result<Self, ClientCreationError> {
        let base_url = Url::parse(url_str)?;
        Ok(FeederGatewayUrls {
            get_nonce: base_url.join(GET_NONCE_URL)?,
            get_class_by_hash: base_url.join(GET_CLASS_BY_HASH_URL)?,
            get_compiled_class_by_hash: base_url.join(GET_COMPILED_CLASS_BY_HASH_URL)?,
            get_transaction: base_url.join(GET_TRANSACTION_URL)?,
            get_transaction_receipt: base_url.join(GET_TRANSACTION_RECEIPT_URL)?,
        })
    }
}

// The feeder gateway expects hex query values. Serializing through serde
// yields the same representation the gateway itself serves, quotes included.
fn hex_query_value<V: Serialize>(value: &V) -> ClientResult<String> {
    let serialized = serde_json::to_string(value)?;
    Ok(serialized.trim_matches('"').to_string())
}

impl FeederGatewayClient {
    pub fn new(url_str: &str) -> Result<Self, ClientCreationError> {
        Ok(FeederGatewayClient {
            urls: FeederGatewayUrls::new(url_str)?,
            client: DevnetClient::new()?,
        })
    }

    async fn request_url(&self, url: Url) -> ClientResult<String> {
        self.client.request(self.client.internal_client.get(url)).await
    }

    async fn request_raw_json<V: Serialize>(
        &self,
        mut url: Url,
        query: &str,
        value: &V,
    ) -> ClientResult<serde_json::Value> {
        url.query_pairs_mut().append_pair(query, &hex_query_value(value)?);
        let response = self.request_url(url).await?;
        Ok(serde_json::from_str(&response)?)
    }
}

#[async_trait]
impl FeederGatewayReader for FeederGatewayClient {
    #[instrument(skip(self), level = "debug")]
    async fn nonce(&self, contract_address: ContractAddress) -> ClientResult<Nonce> {
        let mut url = self.urls.get_nonce.clone();
        url.query_pairs_mut()
            .append_pair(CONTRACT_ADDRESS_QUERY, &hex_query_value(&contract_address)?);
        let response = self.request_url(url).await;
        match response {
            // The body is a JSON string containing a hex nonce.
            Ok(raw_nonce) => Ok(serde_json::from_str(&raw_nonce)?),
            Err(err) => {
                debug!(
                    "Failed to get nonce of contract {:?} from the feeder gateway.",
                    contract_address
                );
                Err(err)
            }
        }
    }

    #[instrument(skip(self), level = "debug")]
    async fn class_by_hash(&self, class_hash: ClassHash) -> ClientResult<serde_json::Value> {
        let response = self
            .request_raw_json(self.urls.get_class_by_hash.clone(), CLASS_HASH_QUERY, &class_hash)
            .await;
        if response.is_err() {
            debug!("Failed to get class with hash {:?} from the feeder gateway.", class_hash);
        }
        response
    }

    #[instrument(skip(self), level = "debug")]
    async fn compiled_class_by_hash(
        &self,
        class_hash: ClassHash,
    ) -> ClientResult<serde_json::Value> {
        let response = self
            .request_raw_json(
                self.urls.get_compiled_class_by_hash.clone(),
                CLASS_HASH_QUERY,
                &class_hash,
            )
            .await;
        if response.is_err() {
            debug!(
                "Failed to get compiled class with hash {:?} from the feeder gateway.",
                class_hash
            );
        }
        response
    }

    #[instrument(skip(self), level = "debug")]
    async fn transaction(
        &self,
        transaction_hash: TransactionHash,
    ) -> ClientResult<serde_json::Value> {
        let response = self
            .request_raw_json(
                self.urls.get_transaction.clone(),
                TRANSACTION_HASH_QUERY,
                &transaction_hash,
            )
            .await;
        if response.is_err() {
            debug!(
                "Failed to get transaction with hash {:?} from the feeder gateway.",
                transaction_hash
            );
        }
        response
    }

    #[instrument(skip(self), level = "debug")]
    async fn transaction_receipt(
        &self,
        transaction_hash: TransactionHash,
    ) -> ClientResult<serde_json::Value> {
        let response = self
            .request_raw_json(
                self.urls.get_transaction_receipt.clone(),
                TRANSACTION_HASH_QUERY,
                &transaction_hash,
            )
            .await;
        if response.is_err() {
            debug!(
                "Failed to get the receipt of transaction {:?} from the feeder gateway.",
                transaction_hash
            );
        }
        response
    }
}
