use std::env;
use std::time::Duration;

use reqwest::Client;

use super::dto::NewsResponse;
use crate::modules::feeds::domain::NewsArticle;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;

const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const QUERY: &str =
    "nutrition OR dieta OR alimentación OR nutrición OR diet OR nutrición balanceada";
const MAX_ARTICLES: usize = 10;

/// Client for the NewsAPI `everything` endpoint, tuned to Spanish nutrition
/// topics.
pub struct NewsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl NewsClient {
    /// Build the client from the `NEWS_API_KEY` environment variable.
    pub fn from_env() -> AppResult<Self> {
        let api_key = env::var("NEWS_API_KEY").map_err(|_| {
            AppError::InternalError("NEWS_API_KEY environment variable not found".to_string())
        })?;
        Self::new(api_key)
    }

    pub fn new(api_key: String) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent("yum/1.0")
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
        })
    }

    /// Override the endpoint, for tests against a local stub server.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Newest Spanish-language nutrition headlines, at most ten.
    pub async fn nutrition_news(&self) -> AppResult<Vec<NewsArticle>> {
        let start = std::time::Instant::now();
        let url = format!("{}/everything", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", QUERY),
                ("language", "es"),
                ("sortBy", "publishedAt"),
                ("pageSize", "10"),
                ("apiKey", &self.api_key),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ApiError(format!(
                "NewsAPI returned error: {}",
                response.status()
            )));
        }

        let payload: NewsResponse = response.json().await?;
        if payload.status.as_deref() == Some("error") {
            return Err(AppError::ApiError(format!(
                "NewsAPI error: {}",
                payload.message.unwrap_or_else(|| "unknown".to_string())
            )));
        }

        LogContext::api_call(
            "NewsAPI",
            "everything",
            "ok",
            Some(start.elapsed().as_millis() as u64),
        );

        Ok(payload.into_articles(MAX_ARTICLES))
    }
}
