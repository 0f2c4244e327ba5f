use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use super::super::entities::ingredient::Ingredient;
use crate::modules::catalog::domain::entities::ingredient_type::IngredientCategory;
use crate::shared::errors::AppResult;

/// An ingredient row joined with the catalog data the scoring prompt needs.
#[derive(Debug, Clone, Serialize)]
pub struct IngredientWithType {
    pub ingredient: Ingredient,
    pub type_name: String,
    pub category: IngredientCategory,
    pub vitamins: Vec<String>,
    pub excesses: Vec<String>,
}

/// The `*_rescoring` operations pair an ingredient mutation with the write
/// of the recipe's new `nutritional_value` in one transaction, so readers
/// never observe the mutation without its score or the score without its
/// mutation.
#[async_trait]
pub trait IngredientRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Ingredient>>;

    async fn list_with_types(&self, recipe_id: &Uuid) -> AppResult<Vec<IngredientWithType>>;

    async fn insert_rescoring(
        &self,
        ingredient: &Ingredient,
        nutritional_value: i32,
    ) -> AppResult<Ingredient>;

    async fn update_rescoring(
        &self,
        ingredient: &Ingredient,
        nutritional_value: i32,
    ) -> AppResult<Ingredient>;

    async fn delete_rescoring(
        &self,
        ingredient_id: &Uuid,
        recipe_id: &Uuid,
        nutritional_value: i32,
    ) -> AppResult<()>;
}
