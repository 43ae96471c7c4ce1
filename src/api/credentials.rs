use std::fmt::Debug;

use reqwest::header::{HeaderMap, HeaderValue};

use crate::config::{Config, ConfigError, RIOT_API_KEY};

/// Header carrying the Riot API key.
pub const API_KEY_HEADER: &str = "X-Riot-Token";

/// Supplier of the base URL template and of the authentication headers.
///
/// Both accessors are read once per request and never cached by the client.
pub trait CredentialSource: Send + Sync + Debug {
    /// Base URL containing a `{region}` placeholder.
    fn base_url_template(&self) -> String;

    fn auth_headers(&self) -> HeaderMap;
}

/// Credentials fixed at construction time.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    base_url_template: String,
    api_key: HeaderValue,
}

impl StaticCredentials {
    pub fn new(base_url_template: impl Into<String>, api_key: &str) -> Result<Self, ConfigError> {
        let mut api_key = HeaderValue::from_str(api_key).map_err(|e| ConfigError::Invalid {
            name: RIOT_API_KEY,
            reason: e.to_string(),
        })?;
        api_key.set_sensitive(true);

        Ok(Self {
            base_url_template: base_url_template.into(),
            api_key,
        })
    }
}

impl TryFrom<&Config> for StaticCredentials {
    type Error = ConfigError;

    fn try_from(config: &Config) -> Result<Self, Self::Error> {
        Self::new(config.api_url.clone(), &config.api_key)
    }
}

impl CredentialSource for StaticCredentials {
    fn base_url_template(&self) -> String {
        self.base_url_template.clone()
    }

    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, self.api_key.clone());
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_headers_carry_the_key() {
        let credentials = StaticCredentials::new("{region}.league.api.com", "fake_api_key").unwrap();

        let headers = credentials.auth_headers();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[API_KEY_HEADER], "fake_api_key");
        assert_eq!(credentials.base_url_template(), "{region}.league.api.com");
    }

    #[test]
    fn key_is_hidden_from_debug_output() {
        let credentials = StaticCredentials::new("{region}.league.api.com", "fake_api_key").unwrap();

        assert!(!format!("{credentials:?}").contains("fake_api_key"));
    }

    #[test]
    fn invalid_key_is_rejected() {
        let err = StaticCredentials::new("{region}.league.api.com", "bad\nkey").unwrap_err();

        assert!(matches!(err, ConfigError::Invalid { name: RIOT_API_KEY, .. }));
    }

    #[test]
    fn builds_from_config() {
        let config = Config {
            api_url: "https://{region}.api.riotgames.com".to_string(),
            api_key: "RGAPI-test".to_string(),
            timeout: None,
        };

        let credentials = StaticCredentials::try_from(&config).unwrap();
        assert_eq!(credentials.base_url_template(), config.api_url);
    }
}
