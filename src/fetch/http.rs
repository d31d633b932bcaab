use reqwest::Client;
use std::time::Duration;

use crate::config::HttpConfig;

use super::error::FetchError;
use super::retriever::{RawResponse, Retriever};

/// [`Retriever`] backed by a shared reqwest client. Identifiers are URLs.
#[derive(Clone)]
pub struct HttpRetriever {
    client: Client,
}

impl HttpRetriever {
    pub fn new(config: &HttpConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        Ok(Self { client })
    }
}

impl Retriever for HttpRetriever {
    async fn retrieve(&self, identifier: &str) -> Result<RawResponse, FetchError> {
        let response = self
            .client
            .get(identifier)
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        Ok(RawResponse::new(status, body.to_vec()))
    }
}
