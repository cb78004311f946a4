//! This module contains a client that can request changes to the devnet
//! through its gateway.

pub mod objects;

#[cfg(test)]
#[path = "gateway_client_test.rs"]
mod gateway_client_test;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use url::Url;

use crate::writer::objects::response::DeclareResponse;
use crate::writer::objects::transaction::DeclareV2Transaction;
use crate::{ClientCreationError, ClientResult, DevnetClient};

/// A trait describing an object that can submit transactions to the devnet
/// gateway.
#[async_trait]
pub trait GatewayWriter {
    /// Submits a declare transaction to the gateway.
    async fn add_declare_transaction(
        &self,
        tx: &DeclareV2Transaction,
    ) -> ClientResult<DeclareResponse>;
}

const ADD_TRANSACTION_URL_SUFFIX: &str = "gateway/add_transaction";

/// A client for the devnet gateway.
pub struct GatewayClient {
    add_transaction_url: Url,
    client: DevnetClient,
}

#[async_trait]
impl GatewayWriter for GatewayClient {
    #[instrument(skip(self, tx), level = "debug")]
    async fn add_declare_transaction(
        &self,
        tx: &DeclareV2Transaction,
    ) -> ClientResult<DeclareResponse> {
        self.add_transaction(tx).await
    }
}

impl GatewayClient {
    pub fn new(url_str: &str) -> Result<Self, ClientCreationError> {
        Ok(GatewayClient {
            add_transaction_url: Url::parse(url_str)?.join(ADD_TRANSACTION_URL_SUFFIX)?,
            client: DevnetClient::new()?,
        })
    }

    async fn add_transaction<Transaction: Serialize, Response: for<'a> Deserialize<'a>>(
        &self,
        tx: &Transaction,
    ) -> ClientResult<Response> {
        let response: String = self
            .client
            .request(
                self.client
                    .internal_client
                    .post(self.add_transaction_url.clone())
                    .body(serde_json::to_string(tx)?),
            )
            .await?;
        Ok(serde_json::from_str::<Response>(&response)?)
    }
}
