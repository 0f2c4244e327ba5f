pub mod persistence;

pub use persistence::IngredientTypeRepositoryImpl;
