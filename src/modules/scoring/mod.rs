pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use domain::ScoringOracle;
pub use infrastructure::gemini::GeminiClient;

#[cfg(test)]
pub use domain::MockScoringOracle;
