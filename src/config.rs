use std::{env, fmt, time::Duration};

use thiserror::Error;

pub const RIOT_API_URL: &str = "RIOT_API_URL";
pub const RIOT_API_KEY: &str = "RIOT_API_KEY";
pub const RIOT_API_TIMEOUT_SECS: &str = "RIOT_API_TIMEOUT_SECS";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Settings needed to reach the Riot API.
#[derive(Clone)]
pub struct Config {
    /// Base URL template, e.g. `https://{region}.api.riotgames.com`.
    pub api_url: String,
    pub api_key: String,
    /// Per-request timeout applied by the HTTP transport. None keeps the client default.
    pub timeout: Option<Duration>,
}

impl Config {
    /// Read the configuration from the environment, loading `.env` first.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup(RIOT_API_URL).ok_or(ConfigError::Missing(RIOT_API_URL))?;
        let api_key = lookup(RIOT_API_KEY).ok_or(ConfigError::Missing(RIOT_API_KEY))?;

        let timeout = lookup(RIOT_API_TIMEOUT_SECS)
            .map(|raw| {
                raw.parse::<u64>()
                    .map(Duration::from_secs)
                    .map_err(|e| ConfigError::Invalid {
                        name: RIOT_API_TIMEOUT_SECS,
                        reason: e.to_string(),
                    })
            })
            .transpose()?;

        Ok(Self {
            api_url,
            api_key,
            timeout,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
