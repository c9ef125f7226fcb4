//! HTTP profile source and decision sink.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};

use crate::config::RemoteConfig;
use crate::model::{DecisionMap, Profile};

use super::error::{LoadError, SubmitError};
use super::traits::{DecisionSink, ProfileSource, SubmitAck};

/// Longest response body quoted back in a status error.
const MAX_ERROR_BODY: usize = 512;

/// Builds the shared HTTP client with the configured timeouts.
pub fn build_client(config: &RemoteConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()
}

/// Builds a source and a sink that share one connection pool.
pub fn http_remote(
    config: &RemoteConfig,
) -> Result<(HttpProfileSource, HttpDecisionSink), reqwest::Error> {
    let client = build_client(config)?;
    let source = HttpProfileSource::new(client.clone(), config.candidates_url());
    let sink = HttpDecisionSink::new(client, config.decisions_url());
    Ok((source, sink))
}

/// Fetches candidates with `POST <url>` and an empty JSON object body.
pub struct HttpProfileSource {
    client: Client,
    url: String,
}

impl HttpProfileSource {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ProfileSource for HttpProfileSource {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch_candidates(&self) -> Result<Vec<Profile>, LoadError> {
        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body("{}")
            .send()
            .await
            .map_err(|e| LoadError::Connection {
                url: self.url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
                body: error_body(response).await,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| LoadError::Malformed(format!("Failed to read response body: {}", e)))?;

        serde_json::from_str(&body).map_err(|e| LoadError::Malformed(e.to_string()))
    }
}

/// Sends the decision map with `POST <url>` as a JSON object.
pub struct HttpDecisionSink {
    client: Client,
    url: String,
}

impl HttpDecisionSink {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DecisionSink for HttpDecisionSink {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn submit_decisions(&self, decisions: &DecisionMap) -> Result<SubmitAck, SubmitError> {
        let response = self
            .client
            .post(&self.url)
            .json(decisions)
            .send()
            .await
            .map_err(|e| SubmitError::Connection {
                url: self.url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status {
                status: status.as_u16(),
                body: error_body(response).await,
            });
        }

        // The sink has no fixed response schema; take what we recognise.
        let body = response.text().await.unwrap_or_default();
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }
}

async fn error_body(response: Response) -> String {
    let mut body = response.text().await.unwrap_or_default();
    if body.len() > MAX_ERROR_BODY {
        let mut cut = MAX_ERROR_BODY;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        body.truncate(cut);
        body.push('…');
    }
    body
}
