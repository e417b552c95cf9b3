// src/infrastructure/http_probe.rs
use crate::application::KeyProbe;
use crate::constants::USER_AGENT;
use crate::domain::DomainError;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, instrument};

/// [`KeyProbe`] backed by a blocking HTTP client.
///
/// One GET per probe, bounded by the timeout; no retries.
#[derive(Debug, Clone)]
pub struct HttpKeyProbe {
    client: Client,
}

impl HttpKeyProbe {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl KeyProbe for HttpKeyProbe {
    // the url carries the key, keep it out of the span
    #[instrument(level = "debug", skip_all)]
    fn probe(&self, url: &str) -> Result<u16, DomainError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| DomainError::Network(e.without_url().to_string()))?;

        let status = response.status().as_u16();
        debug!(status, "Key probe answered");
        Ok(status)
    }
}
