//! Rate-limited HTTP plumbing for the scoring oracle.
//!
//! The generative API enforces a small per-minute quota on free keys, so
//! every request waits on a governor limiter before touching the network,
//! and 429/5xx responses are retried per the policy.

use governor::{Quota, RateLimiter as GovernorRateLimiter};
use reqwest::{Client, Response};
use serde_json::Value;
use std::num::NonZeroU32;
use std::time::Duration;
use tokio::time::sleep;

use super::retry_policy::{is_retryable_error, RateLimitInfo, RetryPolicy};
use crate::shared::errors::{AppError, AppResult};

type DirectRateLimiter = GovernorRateLimiter<
    governor::state::direct::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
    governor::middleware::NoOpMiddleware,
>;

/// JSON-POST client with a local request quota and retry-on-transient
/// failure. The oracle only ever POSTs, so that is the whole surface.
pub struct RateLimitClient {
    client: Client,
    rate_limiter: DirectRateLimiter,
    retry_policy: RetryPolicy,
    service_name: String,
}

impl RateLimitClient {
    /// Client tuned for the Gemini generateContent endpoint.
    ///
    /// Free-tier quota is 15 requests per minute; 0.25 req/sec with a small
    /// burst keeps us under it even when several mutations land together.
    pub fn for_gemini() -> AppResult<Self> {
        Self::new("Gemini", RetryPolicy::gemini(), 0.25, 4, Duration::from_secs(10))
    }

    pub fn new(
        service_name: &str,
        retry_policy: RetryPolicy,
        requests_per_second: f64,
        burst_size: u32,
        request_timeout: Duration,
    ) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .user_agent("yum/1.0")
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        let period = if requests_per_second > 0.0 {
            Duration::from_secs_f64(1.0 / requests_per_second)
        } else {
            Duration::MAX
        };
        let burst = NonZeroU32::new(burst_size.max(1)).unwrap();
        let quota = Quota::with_period(period).unwrap().allow_burst(burst);

        Ok(Self {
            client,
            rate_limiter: GovernorRateLimiter::direct(quota),
            retry_policy,
            service_name: service_name.to_string(),
        })
    }

    /// POST a JSON body and deserialize the JSON reply, retrying transient
    /// failures per the policy.
    pub async fn post_json<T>(&self, url: &str, body: &Value) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut last_error = None;

        for attempt in 0..=self.retry_policy.max_retries {
            self.rate_limiter.until_ready().await;

            let sent = self
                .client
                .post(url)
                .header("Accept", "application/json")
                .json(body)
                .send()
                .await;

            match sent {
                Ok(response) if response.status() == 429 => {
                    if attempt == self.retry_policy.max_retries {
                        return Err(AppError::RateLimitError(format!(
                            "{} rate limit exceeded after {} attempts",
                            self.service_name,
                            attempt + 1
                        )));
                    }
                    // The server knows its own window better than our backoff
                    let info = RateLimitInfo::from_headers(response.headers());
                    let delay = info
                        .recommended_delay()
                        .map(|d| d.min(self.retry_policy.max_delay))
                        .unwrap_or_else(|| self.retry_policy.calculate_delay(attempt, None));
                    self.warn_and_wait(attempt, "rate limited", delay).await;
                }
                Ok(response) if response.status().is_server_error() => {
                    let status = response.status();
                    if attempt == self.retry_policy.max_retries {
                        return Err(AppError::ApiError(format!(
                            "{} returned error: {}",
                            self.service_name, status
                        )));
                    }
                    let delay = self.retry_policy.calculate_delay(attempt, None);
                    self.warn_and_wait(attempt, status.as_str(), delay).await;
                }
                Ok(response) if !response.status().is_success() => {
                    // Client errors are not transient; give up immediately
                    return Err(AppError::ApiError(format!(
                        "{} returned error: {}",
                        self.service_name,
                        response.status()
                    )));
                }
                Ok(response) => return self.parse_response(response).await,
                Err(e) => {
                    let retryable = is_retryable_error(&e);
                    last_error = Some(AppError::from(e));

                    if !retryable || attempt == self.retry_policy.max_retries {
                        return Err(last_error.unwrap_or_else(|| {
                            AppError::ApiError(format!("{} request failed", self.service_name))
                        }));
                    }
                    let delay = self.retry_policy.calculate_delay(attempt, None);
                    self.warn_and_wait(attempt, "request failed", delay).await;
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            AppError::ApiError(format!("{} request failed", self.service_name))
        }))
    }

    async fn warn_and_wait(&self, attempt: u32, cause: &str, delay: Duration) {
        log::warn!(
            "{} API {} (attempt {}/{}), retrying in {:?}",
            self.service_name,
            cause,
            attempt + 1,
            self.retry_policy.max_retries + 1,
            delay
        );
        sleep(delay).await;
    }

    async fn parse_response<T>(&self, response: Response) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response_text = response.text().await.map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to read {} response: {}",
                self.service_name, e
            ))
        })?;

        serde_json::from_str(&response_text).map_err(|e| {
            let preview: String = response_text.chars().take(200).collect();
            AppError::SerializationError(format!(
                "Failed to parse {} response: {}. Response: {}",
                self.service_name, e, preview
            ))
        })
    }

    /// Whether the quota would admit a request right now.
    pub fn can_make_request_now(&self) -> bool {
        self.rate_limiter.check().is_ok()
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}
