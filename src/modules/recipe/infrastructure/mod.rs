pub mod persistence;

pub use persistence::{IngredientRepositoryImpl, InstructionRepositoryImpl, RecipeRepositoryImpl};
