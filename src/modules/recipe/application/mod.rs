pub mod coordinator;
pub mod service;

pub use coordinator::RecomputeCoordinator;
pub use service::{RecipeDetail, RecipeService};
