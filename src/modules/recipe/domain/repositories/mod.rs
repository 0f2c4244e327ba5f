pub mod ingredient_repository;
pub mod instruction_repository;
pub mod recipe_repository;

pub use ingredient_repository::{IngredientRepository, IngredientWithType};
pub use instruction_repository::InstructionRepository;
pub use recipe_repository::{RecipeFilter, RecipeRepository};
