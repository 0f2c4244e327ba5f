pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use entities::ingredient::Ingredient;
pub use entities::instruction::Instruction;
pub use entities::recipe::Recipe;
pub use repositories::ingredient_repository::{IngredientRepository, IngredientWithType};
pub use repositories::instruction_repository::InstructionRepository;
pub use repositories::recipe_repository::{RecipeFilter, RecipeRepository};
pub use services::nutrition_engine::NutritionEngine;
pub use value_objects::scoring_snapshot::ScoringSnapshot;
