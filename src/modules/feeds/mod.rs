pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use domain::{FoodRegister, FoodRegisterIngredient, NewsArticle};
pub use infrastructure::{FoodRegistryClient, NewsClient};
