mod ingredient_type_model;
mod ingredient_type_repository_impl;

pub use ingredient_type_repository_impl::IngredientTypeRepositoryImpl;
