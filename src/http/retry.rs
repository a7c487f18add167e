//! Retry policy and status classification for the releases request.

use std::time::Duration;

use log::{debug, warn};
use reqwest::StatusCode;

use crate::error::TrackError;

/// Delay between retry attempts in milliseconds.
pub const RETRY_DELAY_MS: u64 = 1000;

/// Client errors that will not succeed on another attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NonRetryableError {
    /// HTTP 403 with a rate limit message, or 429
    RateLimitExceeded(String),
    /// HTTP 401
    AuthenticationFailed(String),
    /// HTTP 404
    NotFound(String),
    /// HTTP 403 that is not a rate limit
    Forbidden(String),
    /// Any other 4xx
    ClientError(String),
}

impl std::fmt::Display for NonRetryableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NonRetryableError::RateLimitExceeded(msg) => {
                write!(f, "Rate limit exceeded: {}. Try again later.", msg)
            }
            NonRetryableError::AuthenticationFailed(msg) => {
                write!(f, "Authentication failed: {}", msg)
            }
            NonRetryableError::NotFound(msg) => write!(f, "Not found: {}", msg),
            NonRetryableError::Forbidden(msg) => write!(f, "Access forbidden: {}", msg),
            NonRetryableError::ClientError(msg) => write!(f, "Request error: {}", msg),
        }
    }
}

impl std::error::Error for NonRetryableError {}

/// Classifies an error status. `None` means the failure may be retried.
///
/// `body` is consulted only to tell a rate-limited 403 from a plain one.
pub fn classify_status(status: StatusCode, body: &str) -> Option<NonRetryableError> {
    match status {
        StatusCode::UNAUTHORIZED => Some(NonRetryableError::AuthenticationFailed(
            "The API refused the request".to_string(),
        )),
        StatusCode::FORBIDDEN => {
            if body.contains("rate limit") {
                Some(NonRetryableError::RateLimitExceeded(
                    "GitHub API rate limit exceeded".to_string(),
                ))
            } else {
                Some(NonRetryableError::Forbidden(
                    "Access to this resource is forbidden".to_string(),
                ))
            }
        }
        StatusCode::TOO_MANY_REQUESTS => Some(NonRetryableError::RateLimitExceeded(
            "Too many requests".to_string(),
        )),
        StatusCode::NOT_FOUND => Some(NonRetryableError::NotFound(
            "The repository or its releases were not found".to_string(),
        )),
        s if s.is_client_error() => Some(NonRetryableError::ClientError(format!(
            "HTTP {} error",
            s.as_u16()
        ))),
        _ => None,
    }
}

/// How many extra attempts a retryable failure gets, and how far apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub retries: usize,
    pub delay: Duration,
}

impl RetryPolicy {
    /// A single attempt.
    pub fn none() -> Self {
        Self::new(0)
    }

    pub fn new(retries: usize) -> Self {
        Self {
            retries,
            delay: Duration::from_millis(RETRY_DELAY_MS),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Saturates at `usize::MAX`.
    pub fn max_attempts(&self) -> usize {
        self.retries.saturating_add(1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}

/// Runs `operation` until it succeeds, fails with a non-retryable error, or
/// the policy runs out of attempts.
pub async fn with_retry<F, Fut, T>(
    policy: RetryPolicy,
    operation_name: &str,
    operation: F,
) -> Result<T, TrackError>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<T, TrackError>>,
{
    let max_attempts = policy.max_attempts();
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(e) if !e.is_retryable() => {
                debug!("{}: non-retryable error: {}", operation_name, e);
                return Err(e);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(e) => {
                warn!(
                    "{}: attempt {}/{} failed ({}), retrying in {}ms...",
                    operation_name,
                    attempt,
                    max_attempts,
                    e,
                    policy.delay.as_millis()
                );
                tokio::time::sleep(policy.delay).await;
                attempt += 1;
            }
        }
    }
}
