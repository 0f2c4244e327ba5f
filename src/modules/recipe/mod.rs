pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::coordinator::RecomputeCoordinator;
pub use application::service::RecipeService;
pub use domain::{
    Ingredient, IngredientRepository, IngredientWithType, Instruction, InstructionRepository,
    NutritionEngine, Recipe, RecipeFilter, RecipeRepository, ScoringSnapshot,
};
