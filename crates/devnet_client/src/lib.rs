//! Client implementation for the gateway of a [`Starknet`]-like devnet.
//!
//! [`Starknet`]: https://starknet.io/

pub mod reader;
pub mod writer;

#[cfg(test)]
mod test_utils;

use std::fmt::{self, Display, Formatter};

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};

/// A [`Result`] in which the error is a [`ClientError`].
pub type ClientResult<T> = Result<T, ClientError>;

/// An error body returned by the gateway along with an HTTP 500 status.
///
/// The code set differs between devnets, so the code is kept as the raw
/// string the gateway sent.
#[derive(thiserror::Error, Debug, Deserialize, Serialize)]
pub struct GatewayError {
    pub code: String,
    pub message: String,
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Errors that might be encountered while creating a client.
#[derive(thiserror::Error, Debug)]
pub enum ClientCreationError {
    #[error(transparent)]
    BadUrl(#[from] url::ParseError),
    #[error(transparent)]
    BuildError(#[from] reqwest::Error),
}

/// Errors that may be returned by a client.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// A client error representing bad status http responses.
    #[error("Bad response status code: {:?} message: {:?}.", code, message)]
    BadResponseStatus { code: StatusCode, message: String },
    /// A client error representing http request errors.
    #[error(transparent)]
    RequestError(#[from] reqwest::Error),
    /// A client error representing deserialization errors.
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    /// A client error representing an error body returned by the gateway.
    #[error(transparent)]
    GatewayError(#[from] GatewayError),
}

/// Plumbing shared by the feeder gateway and gateway clients: sends a prepared
/// request and dispatches on the response status.
pub(crate) struct DevnetClient {
    pub(crate) internal_client: Client,
}

impl DevnetClient {
    pub(crate) fn new() -> Result<Self, ClientCreationError> {
        Ok(DevnetClient { internal_client: Client::builder().build()? })
    }

    pub(crate) async fn request(&self, request_builder: RequestBuilder) -> ClientResult<String> {
        let res = request_builder.send().await;
        let (code, message) = match res {
            Ok(response) => (response.status(), response.text().await?),
            Err(err) => {
                let msg = err.to_string();
                (err.status().ok_or(err)?, msg)
            }
        };
        match code {
            StatusCode::OK => Ok(message),
            // The gateway reports its own errors as a JSON body with a 500
            // status. Bodies that don't parse as one are surfaced raw.
            StatusCode::INTERNAL_SERVER_ERROR => {
                match serde_json::from_str::<GatewayError>(&message) {
                    Ok(gateway_error) => Err(ClientError::GatewayError(gateway_error)),
                    Err(_) => Err(ClientError::BadResponseStatus { code, message }),
                }
            }
            _ => Err(ClientError::BadResponseStatus { code, message }),
        }
    }
}
