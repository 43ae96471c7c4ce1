use std::{fmt::Debug, time::Duration};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use thiserror::Error;

/// Failure of a single HTTP exchange.
#[derive(Debug, Error, Clone)]
#[error("{message}")]
pub struct TransportError {
    /// HTTP status, when the server answered.
    pub status: Option<u16>,
    pub message: String,
    /// Raw body of a non-success response.
    pub body: Option<Bytes>,
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
            body: None,
        }
    }
}

/// Trait implemented by structures capable of performing raw HTTP GET requests.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn get(&self, url: &str, headers: HeaderMap) -> Result<Bytes, TransportError>;
}

/// [`Transport`] backed by a [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a transport whose requests are aborted after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, headers: HeaderMap) -> Result<Bytes, TransportError> {
        let res = self.client.get(url).headers(headers).send().await?;

        let status_error = res.error_for_status_ref().err();

        if let Some(err) = status_error {
            let mut failure = TransportError::from(err);
            failure.body = res.bytes().await.ok();
            return Err(failure);
        }

        Ok(res.bytes().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_propagates_invalid_url() {
        let transport = ReqwestTransport::new();

        let res = transport.get("ht!tp://invalid-url", HeaderMap::new()).await;

        let err = res.unwrap_err();
        assert_eq!(err.status, None);
        assert!(err.body.is_none());
    }

    #[test]
    fn with_timeout_builds_a_client() {
        assert!(ReqwestTransport::with_timeout(Duration::from_secs(5)).is_ok());
    }
}
