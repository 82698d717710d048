use std::time::Duration;

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::Deserialize;

use crate::error::Result;
use crate::model::Code;

/// Default per-request timeout in seconds.
const DEFAULT_REQUEST_TIMEOUT: u64 = 30;

/// Application configuration, derived from `VOTEDRAFT_*` environment
/// variables by the embedding application.
#[derive(Debug, Deserialize)]
pub struct Config {
    api_url: String,
    site_url: String,
    request_timeout: u64,
}

impl Config {
    /// Load the configuration from the environment.
    pub fn load() -> Result<Self> {
        let config = Figment::from(Env::prefixed("VOTEDRAFT_"))
            .join(Serialized::default(
                "request_timeout",
                DEFAULT_REQUEST_TIMEOUT,
            ))
            .extract()?;
        Ok(config)
    }

    /// Base URL of the persistence API, without a trailing slash.
    /// Configured via `VOTEDRAFT_API_URL`.
    pub fn api_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    /// Public URL of the site, without a trailing slash.
    /// Configured via `VOTEDRAFT_SITE_URL`.
    pub fn site_url(&self) -> &str {
        self.site_url.trim_end_matches('/')
    }

    /// Timeout applied to each API request.
    /// Configured via `VOTEDRAFT_REQUEST_TIMEOUT` (seconds).
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// The invite link participants follow to open the vote with the
    /// given code.
    pub fn participant_url(&self, code: &Code) -> String {
        format!("{}/participant/{}", self.site_url(), code)
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl Config {
        pub fn example() -> Self {
            Self {
                api_url: "https://vote.example.com/api".to_string(),
                site_url: "https://vote.example.com".to_string(),
                request_timeout: DEFAULT_REQUEST_TIMEOUT,
            }
        }
    }
}
