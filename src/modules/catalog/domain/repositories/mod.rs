pub mod ingredient_type_repository;
