use std::time::Duration;

use reqwest::Client;

use super::dto::FoodRegistersResponse;
use crate::modules::feeds::domain::FoodRegister;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;

const DEFAULT_BASE_URL: &str = "https://respectful-miracle-production.up.railway.app/api/External";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Read-only client for the external food-register feed. Failures surface
/// as [`AppError`]; callers show an error and an empty list.
pub struct FoodRegistryClient {
    client: Client,
    base_url: String,
}

impl FoodRegistryClient {
    pub fn new() -> AppResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent("yum/1.0")
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Override the endpoint, for tests against a local stub server.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub async fn food_registers(&self) -> AppResult<Vec<FoodRegister>> {
        let start = std::time::Instant::now();
        let url = format!("{}/food_registers/", self.base_url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(AppError::ApiError(format!(
                "Food registry returned error: {}",
                response.status()
            )));
        }

        let payload: FoodRegistersResponse = response.json().await?;

        LogContext::api_call(
            "FoodRegistry",
            "food_registers",
            "ok",
            Some(start.elapsed().as_millis() as u64),
        );

        Ok(payload
            .results
            .into_iter()
            .map(|dto| dto.into_entity())
            .collect())
    }
}
