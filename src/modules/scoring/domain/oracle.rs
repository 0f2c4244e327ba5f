use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::shared::errors::AppResult;

/// Capability for obtaining a free-text nutrition assessment of a recipe.
///
/// Constructed once at process start and injected into the recompute
/// pipeline, so tests can substitute a deterministic implementation.
/// Implementations return the raw reply text; interpreting it (digit
/// extraction, clamping, fallback) is the engine's job.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ScoringOracle: Send + Sync {
    async fn score(&self, prompt: &str) -> AppResult<String>;
}
