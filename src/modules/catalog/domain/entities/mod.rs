pub mod ingredient_type;
