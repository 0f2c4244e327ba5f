//! Backoff configuration for outbound scoring calls.

use std::time::Duration;

/// How a failed request is retried: a few attempts, exponential backoff
/// with jitter, and a hard cap on any single wait.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
    /// Spread retries out so parallel mutations do not re-hit the quota in
    /// lockstep.
    pub jitter: bool,
}

impl RetryPolicy {
    /// Policy for the Gemini generateContent endpoint.
    ///
    /// Kept short on purpose: the caller holds an open mutation request and
    /// the engine falls back to a fixed score anyway, so there is no point
    /// waiting out a long rate-limit window here.
    pub fn gemini() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(15),
            backoff_multiplier: 2.0,
            jitter: true,
        }
    }

    /// Wait before the given (0-based) retry attempt. A server-provided
    /// Retry-After wins over the computed backoff.
    pub fn calculate_delay(&self, attempt: u32, retry_after: Option<Duration>) -> Duration {
        if let Some(server_delay) = retry_after {
            return server_delay.min(self.max_delay);
        }

        let multiplier = self.backoff_multiplier.powi(attempt as i32);
        let mut millis = (self.base_delay.as_millis() as f64 * multiplier) as u64;

        if self.jitter {
            millis += (millis as f64 * 0.1 * rand::random::<f64>()) as u64;
        }

        Duration::from_millis(millis).min(self.max_delay)
    }
}

/// What a 429 response told us about when to come back.
#[derive(Debug, Clone)]
pub struct RateLimitInfo {
    pub retry_after: Option<Duration>,
    pub reset_time: Option<Duration>,
}

impl RateLimitInfo {
    pub fn from_headers(headers: &reqwest::header::HeaderMap) -> Self {
        let retry_after = headers
            .get("retry-after")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs);

        // X-RateLimit-Reset is a unix timestamp; convert to a wait
        let reset_time = headers
            .get("x-ratelimit-reset")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok())
            .map(|timestamp| {
                let now = std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .unwrap_or_default()
                    .as_secs();
                Duration::from_secs(timestamp.saturating_sub(now))
            });

        Self {
            retry_after,
            reset_time,
        }
    }

    pub fn recommended_delay(&self) -> Option<Duration> {
        self.retry_after.or(self.reset_time)
    }
}

/// Whether a transport-level failure is worth another attempt.
pub fn is_retryable_error(error: &reqwest::Error) -> bool {
    if let Some(status) = error.status() {
        matches!(status.as_u16(), 429 | 408 | 500..=599)
    } else {
        error.is_timeout() || error.is_connect()
    }
}
