use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{Code, VoteRecord, VoteUpdate};

/// The persistence boundary: load a vote record, replace a stored vote.
///
/// Both calls are best-effort single attempts with no retry or
/// cancellation semantics; the outcome must be branched on by the caller.
#[async_trait]
pub trait VoteStore {
    /// Fetch the record for the given code.
    async fn fetch_vote(&self, code: &Code) -> Result<VoteRecord>;

    /// Replace the stored vote with the given update, keyed by its code.
    async fn replace_vote(&self, update: &VoteUpdate) -> Result<()>;
}

/// [`VoteStore`] backed by the HTTP persistence API.
pub struct HttpVoteStore {
    http: Client,
    api_url: String,
}

impl HttpVoteStore {
    /// Build a store from the application config.
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder().timeout(config.request_timeout()).build()?;
        Ok(Self {
            http,
            api_url: config.api_url().to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }
}

#[async_trait]
impl VoteStore for HttpVoteStore {
    async fn fetch_vote(&self, code: &Code) -> Result<VoteRecord> {
        debug!("Fetching vote record {code}");
        let response = self
            .http
            .get(self.endpoint(&format!("votes/{code}")))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::not_found(format!("Vote {code}")));
        }
        if !response.status().is_success() {
            return Err(Error::Service(format!(
                "fetching vote {code} returned {}",
                response.status()
            )));
        }
        let record = response.json().await?;
        Ok(record)
    }

    async fn replace_vote(&self, update: &VoteUpdate) -> Result<()> {
        debug!("Replacing vote {}", update.code);
        let response = self
            .http
            .put(self.endpoint("votes"))
            .json(update)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Error::Service(format!(
                "replacing vote {} returned {}",
                update.code,
                response.status()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_the_configured_base() {
        let store = HttpVoteStore::new(&Config::example()).unwrap();
        assert_eq!(
            store.endpoint("votes"),
            "https://vote.example.com/api/votes"
        );
        assert_eq!(
            store.endpoint(&format!("votes/{}", Code::example())),
            "https://vote.example.com/api/votes/fh7gk2"
        );
    }
}
