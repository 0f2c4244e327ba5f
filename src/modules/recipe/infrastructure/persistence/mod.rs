mod ingredient_model;
mod ingredient_repository_impl;
mod instruction_model;
mod instruction_repository_impl;
mod recipe_model;
mod recipe_repository_impl;

pub use ingredient_repository_impl::IngredientRepositoryImpl;
pub use instruction_repository_impl::InstructionRepositoryImpl;
pub use recipe_repository_impl::RecipeRepositoryImpl;
