pub mod entities;
pub mod repositories;

pub use entities::ingredient_type::{IngredientCategory, IngredientType};
pub use repositories::ingredient_type_repository::IngredientTypeRepository;
