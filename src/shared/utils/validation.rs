use regex::Regex;

use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    pub fn validate_recipe_title(title: &str) -> Result<(), AppError> {
        if title.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Title cannot be empty".to_string(),
            ));
        }
        if title.len() > 200 {
            return Err(AppError::ValidationError(
                "Title too long (max 200 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_review_score(score: i32) -> Result<(), AppError> {
        if !(0..=5).contains(&score) {
            return Err(AppError::ValidationError(
                "Review score must be between 0 and 5".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_quantity(quantity: f64) -> Result<(), AppError> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(AppError::ValidationError(
                "Quantity must be a positive number".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_unit(unit: &str) -> Result<(), AppError> {
        if unit.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Unit cannot be empty".to_string(),
            ));
        }
        if unit.len() > 50 {
            return Err(AppError::ValidationError(
                "Unit too long (max 50 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_portions(portions: i32) -> Result<(), AppError> {
        if portions < 1 {
            return Err(AppError::ValidationError(
                "Portions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_ingredient_type_name(name: &str) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Ingredient type name cannot be empty".to_string(),
            ));
        }
        if name.len() > 100 {
            return Err(AppError::ValidationError(
                "Ingredient type name too long (max 100 characters)".to_string(),
            ));
        }

        // Letters (any script), digits, spaces and dashes
        let re = Regex::new(r"^[\p{L}0-9\s\-]+$").unwrap();
        if !re.is_match(name.trim()) {
            return Err(AppError::ValidationError(
                "Ingredient type name contains invalid characters".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_instruction_complexity(complexity: i32) -> Result<(), AppError> {
        if !(0..=5).contains(&complexity) {
            return Err(AppError::ValidationError(
                "Instruction complexity must be between 0 and 5".to_string(),
            ));
        }
        Ok(())
    }
}
