//! HTTP client that turns responses into typed values or typed failures.

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::retry::{NonRetryableError, RetryPolicy, classify_status, with_retry};
use crate::error::TrackError;

#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    retry: RetryPolicy,
}

impl HttpClient {
    /// Creates a client that makes a single attempt per request.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            retry: RetryPolicy::none(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Performs a GET request and decodes the JSON body into `T`.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, TrackError> {
        with_retry(self.retry, "GET JSON", || self.get_json_once(url)).await
    }

    async fn get_json_once<T: DeserializeOwned>(&self, url: &str) -> Result<T, TrackError> {
        debug!("GET JSON from {}...", url);

        let network = |source: reqwest::Error| TrackError::Network {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(network)?;
        let status = response.status();

        if status.is_client_error() {
            let body = response.text().await.unwrap_or_default();
            let reason = classify_status(status, &body).unwrap_or_else(|| {
                NonRetryableError::ClientError(format!("HTTP {} error", status.as_u16()))
            });
            return Err(TrackError::Rejected {
                url: url.to_string(),
                reason,
            });
        }

        let response = response.error_for_status().map_err(network)?;
        let body = response.text().await.map_err(network)?;
        debug!("Received {} bytes from {}", body.len(), url);

        serde_json::from_str(&body).map_err(|source| TrackError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
