pub mod food_registry;
pub mod news;

pub use food_registry::FoodRegistryClient;
pub use news::NewsClient;
