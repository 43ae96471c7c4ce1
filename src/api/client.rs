use std::{fmt::Debug, sync::Arc};

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::{
    config::{Config, ConfigError, RIOT_API_TIMEOUT_SECS},
    region::Region,
    types::{ApiError, ApiResponse},
};

use super::{
    credentials::{CredentialSource, StaticCredentials},
    route::{self, PathParam, RouteTemplate},
    transport::{ReqwestTransport, Transport},
};

/// A fully resolved request, alive for the duration of a single call.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRequest {
    pub url: String,
    pub headers: HeaderMap,
}

/// Executes route templates against the Riot API.
///
/// The client holds no mutable state: every call reads the credentials,
/// builds its own URL and performs exactly one GET request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    credentials: Arc<dyn CredentialSource>,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(credentials: Arc<dyn CredentialSource>, transport: Arc<dyn Transport>) -> Self {
        Self {
            credentials,
            transport,
        }
    }

    /// Build a client using [`StaticCredentials`] and a [`ReqwestTransport`] from `config`.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let credentials = StaticCredentials::try_from(config)?;
        let transport = match config.timeout {
            Some(timeout) => {
                ReqwestTransport::with_timeout(timeout).map_err(|e| ConfigError::Invalid {
                    name: RIOT_API_TIMEOUT_SECS,
                    reason: e.message,
                })?
            }
            None => ReqwestTransport::new(),
        };

        Ok(Self::new(Arc::new(credentials), Arc::new(transport)))
    }

    /// Resolve the URL and headers of a request without sending it.
    pub fn resolve(
        &self,
        region: Region,
        route: RouteTemplate,
        params: &[PathParam],
    ) -> ResolvedRequest {
        let base_url = self.credentials.base_url_template();
        if !base_url.contains(route::REGION_PLACEHOLDER) {
            tracing::warn!(
                "[RIOT::CLIENT] base url has no {} placeholder, {} is ignored",
                route::REGION_PLACEHOLDER,
                region
            );
        }

        let path = route.resolve(params);
        let unresolved = RouteTemplate::unresolved(&path);
        if !unresolved.is_empty() {
            tracing::warn!(
                "[RIOT::CLIENT] unresolved placeholders {:?} in {}",
                unresolved,
                route
            );
        }

        let mut url = route::resolve_host(&base_url, region);
        url.push_str(&path);

        ResolvedRequest {
            url,
            headers: self.credentials.auth_headers(),
        }
    }

    /// Perform a GET on `route` in `region` and decode the response as `T`.
    pub async fn execute<T: DeserializeOwned + Debug>(
        &self,
        region: Region,
        route: RouteTemplate,
        params: &[PathParam],
    ) -> ApiResponse<T> {
        let ResolvedRequest { url, headers } = self.resolve(region, route, params);
        tracing::debug!("[RIOT::CLIENT] GET {} in {}", route, region);

        let raw = self.transport.get(&url, headers).await.map_err(|e| {
            tracing::debug!(
                "[RIOT::CLIENT] GET {} in {} failed with status {:?}",
                route,
                region,
                e.status
            );
            ApiError::from_transport(e)
        })?;

        serde_json::from_slice(&raw).map_err(ApiError::decode)
    }
}
