use std::sync::Arc;
use uuid::Uuid;

use super::super::domain::{
    entities::ingredient_type::{IngredientCategory, IngredientType},
    repositories::ingredient_type_repository::IngredientTypeRepository,
};
use crate::modules::account::domain::entities::user::User;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

pub struct CatalogService {
    ingredient_type_repo: Arc<dyn IngredientTypeRepository>,
}

impl CatalogService {
    pub fn new(ingredient_type_repo: Arc<dyn IngredientTypeRepository>) -> Self {
        Self {
            ingredient_type_repo,
        }
    }

    pub async fn create_ingredient_type(
        &self,
        actor: &User,
        name: &str,
        category: IngredientCategory,
        vitamins: Vec<String>,
        excesses: Vec<String>,
    ) -> AppResult<IngredientType> {
        Validator::validate_ingredient_type_name(name)?;

        // Names are stored lowercase, so the uniqueness check is
        // case-insensitive by construction
        let normalized = IngredientType::normalize_name(name);
        if self
            .ingredient_type_repo
            .find_by_name(&normalized)
            .await?
            .is_some()
        {
            return Err(AppError::ValidationError(format!(
                "Ingredient type '{}' is already registered",
                normalized
            )));
        }

        let ingredient_type = IngredientType::new(name, category, Some(actor.id))
            .with_vitamins(vitamins)
            .with_excesses(excesses);

        self.ingredient_type_repo.save(&ingredient_type).await
    }

    pub async fn get_ingredient_type(&self, id: &Uuid) -> AppResult<Option<IngredientType>> {
        self.ingredient_type_repo.find_by_id(id).await
    }

    pub async fn list_ingredient_types(&self) -> AppResult<Vec<IngredientType>> {
        self.ingredient_type_repo.get_all().await
    }

    pub async fn update_ingredient_type(
        &self,
        actor: &User,
        id: &Uuid,
        name: Option<&str>,
        category: Option<IngredientCategory>,
        vitamins: Option<Vec<String>>,
        excesses: Option<Vec<String>>,
    ) -> AppResult<IngredientType> {
        let mut existing = self
            .ingredient_type_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ingredient type {} not found", id)))?;

        Self::authorize(actor, &existing)?;

        if let Some(new_name) = name {
            Validator::validate_ingredient_type_name(new_name)?;

            let normalized = IngredientType::normalize_name(new_name);
            if let Some(other) = self.ingredient_type_repo.find_by_name(&normalized).await? {
                if other.id != existing.id {
                    return Err(AppError::ValidationError(format!(
                        "Ingredient type '{}' is already registered",
                        normalized
                    )));
                }
            }

            existing.rename(new_name);
        }

        if let Some(category) = category {
            existing.category = category;
        }
        if let Some(vitamins) = vitamins {
            existing.vitamins = vitamins;
        }
        if let Some(excesses) = excesses {
            existing.excesses = excesses;
        }

        self.ingredient_type_repo.update(&existing).await
    }

    pub async fn delete_ingredient_type(&self, actor: &User, id: &Uuid) -> AppResult<()> {
        let existing = self
            .ingredient_type_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ingredient type {} not found", id)))?;

        Self::authorize(actor, &existing)?;

        self.ingredient_type_repo.delete(id).await
    }

    fn authorize(actor: &User, ingredient_type: &IngredientType) -> AppResult<()> {
        if actor.is_admin() || ingredient_type.is_owned_by(&actor.id) {
            Ok(())
        } else {
            Err(AppError::Unauthorized(
                "You do not have permission to modify this ingredient type".to_string(),
            ))
        }
    }
}
