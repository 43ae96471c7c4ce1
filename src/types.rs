use serde::Deserialize;
use thiserror::Error;

use crate::api::transport::TransportError;

/// The single failure surfaced by every API call.
///
/// `status` is the HTTP status of the failed response when the remote
/// service answered at all, `message` the top-level transport message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    status: Option<u16>,
    message: String,
    detail: Option<ProviderStatus>,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Nested error reported by the Riot API itself, if its body could be decoded.
    pub fn detail(&self) -> Option<&ProviderStatus> {
        self.detail.as_ref()
    }

    pub(crate) fn from_transport(err: TransportError) -> Self {
        let detail = err
            .body
            .as_deref()
            .and_then(|raw| serde_json::from_slice::<ProviderError>(raw).ok())
            .map(|e| e.status);

        Self {
            status: err.status,
            message: err.message,
            detail,
        }
    }

    pub(crate) fn decode(err: serde_json::Error) -> Self {
        Self {
            status: None,
            message: err.to_string(),
            detail: None,
        }
    }
}

/// Error payload returned by the Riot API on non-success responses.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProviderStatus {
    pub message: String,
    pub status_code: u16,
}

#[derive(Deserialize)]
struct ProviderError {
    status: ProviderStatus,
}

/// A call to Riot API can either result in a success with the success type or fail with an [`ApiError`].
pub type ApiResponse<T> = Result<T, ApiError>;
