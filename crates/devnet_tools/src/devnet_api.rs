//! Client for the local devnet's deploy/invoke/call HTTP API, used by the
//! smoke test.

#[cfg(test)]
#[path = "devnet_api_test.rs"]
mod devnet_api_test;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;
use url::Url;

/// The address a locally-run devnet listens on by default.
pub const DEFAULT_DEVNET_HOST: &str = "http://localhost:5050";

const DEPLOY_URL: &str = "deploy";
const INVOKE_URL: &str = "invoke";
const CALL_URL: &str = "call";

/// The response of the `deploy` endpoint.
#[derive(Debug, Deserialize, Eq, PartialEq)]
pub struct DeployResponse {
    /// The address the contract was deployed at, as a decimal integer.
    pub address: u128,
}

/// Errors raised by the local devnet API client.
#[derive(Debug, thiserror::Error)]
pub enum DevnetApiError {
    #[error(transparent)]
    BadUrl(#[from] url::ParseError),
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error("Bad response status code: {:?} message: {:?}.", code, message)]
    BadResponseStatus { code: StatusCode, message: String },
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

/// A client for a local devnet exposing deploy/invoke/call endpoints.
pub struct DevnetApi {
    urls: DevnetUrls,
    client: Client,
}

#[derive(Clone, Debug)]
struct DevnetUrls {
    deploy: Url,
    invoke: Url,
    call: Url,
}

impl DevnetUrls {
    fn new(url_str: &str) -> Result<Self, url::ParseError> {
        let base_url = Url::parse(url_str)?;
        Ok(DevnetUrls {
            deploy: base_url.join(DEPLOY_URL)?,
            invoke: base_url.join(INVOKE_URL)?,
            call: base_url.join(CALL_URL)?,
        })
    }
}

impl DevnetApi {
    pub fn new(url_str: &str) -> Result<Self, DevnetApiError> {
        Ok(DevnetApi { urls: DevnetUrls::new(url_str)?, client: Client::new() })
    }

    /// Deploys the artifact at `artifact_path` (a path on the devnet host) and
    /// returns the deployment address.
    #[instrument(skip(self), level = "debug")]
    pub async fn deploy(&self, artifact_path: &str) -> Result<DeployResponse, DevnetApiError> {
        let response =
            self.post(self.urls.deploy.clone(), json!({ "path": artifact_path })).await?;
        Ok(serde_json::from_str(&response)?)
    }

    /// Invokes `method_name` on the contract at `address` with `kwargs`.
    #[instrument(skip(self), level = "debug")]
    pub async fn invoke(
        &self,
        address: u128,
        method_name: &str,
        kwargs: serde_json::Value,
    ) -> Result<serde_json::Value, DevnetApiError> {
        let body = json!({ "address": address, "method_name": method_name, "kwargs": kwargs });
        let response = self.post(self.urls.invoke.clone(), body).await?;
        Ok(serde_json::from_str(&response)?)
    }

    /// Calls the read-only `method_name` on the contract at `address`.
    #[instrument(skip(self), level = "debug")]
    pub async fn call(
        &self,
        address: u128,
        method_name: &str,
    ) -> Result<serde_json::Value, DevnetApiError> {
        let body = json!({ "address": address, "method_name": method_name });
        let response = self.post(self.urls.call.clone(), body).await?;
        Ok(serde_json::from_str(&response)?)
    }

    async fn post(&self, url: Url, body: serde_json::Value) -> Result<String, DevnetApiError> {
        let response = self.client.post(url).json(&body).send().await?;
        let code = response.status();
        let message = response.text().await?;
        if code != StatusCode::OK {
            return Err(DevnetApiError::BadResponseStatus { code, message });
        }
        Ok(message)
    }
}
