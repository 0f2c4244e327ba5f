pub mod ingredient;
pub mod instruction;
pub mod recipe;
