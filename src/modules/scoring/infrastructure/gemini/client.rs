use async_trait::async_trait;
use std::env;

use crate::modules::scoring::domain::ScoringOracle;
use crate::modules::scoring::infrastructure::http_client::RateLimitClient;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;

use super::dto::{GenerateContentRequest, GenerateContentResponse};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Scoring oracle backed by the Google Generative Language API.
///
/// Construct once at startup and share via `Arc<dyn ScoringOracle>`.
pub struct GeminiClient {
    http: RateLimitClient,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Build the client from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> AppResult<Self> {
        let api_key = env::var("GEMINI_API_KEY").map_err(|_| {
            AppError::InternalError("GEMINI_API_KEY environment variable not found".to_string())
        })?;
        Self::new(api_key)
    }

    pub fn new(api_key: String) -> AppResult<Self> {
        Ok(Self {
            http: RateLimitClient::for_gemini()?,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key,
        })
    }

    /// Override the endpoint, for tests against a local stub server.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

#[async_trait]
impl ScoringOracle for GeminiClient {
    async fn score(&self, prompt: &str) -> AppResult<String> {
        let start = std::time::Instant::now();
        let request = GenerateContentRequest::from_prompt(prompt);

        let response: GenerateContentResponse = self
            .http
            .post_json(&self.generate_url(), &serde_json::to_value(&request)?)
            .await?;

        LogContext::api_call(
            "Gemini",
            "generateContent",
            "ok",
            Some(start.elapsed().as_millis() as u64),
        );

        response.first_candidate_text().ok_or_else(|| {
            AppError::ApiError("Gemini response contained no candidate text".to_string())
        })
    }
}
