use async_trait::async_trait;
use uuid::Uuid;

use super::super::entities::recipe::Recipe;
use crate::shared::errors::AppResult;

/// Criteria for the recipe listing (title substring, ingredient type,
/// nutrition range). All fields optional; an empty filter lists everything.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    pub title_contains: Option<String>,
    pub ingredient_type_id: Option<Uuid>,
    pub min_nutritional_value: Option<i32>,
    pub max_nutritional_value: Option<i32>,
}

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Insert the full recipe row, including the initial nutritional value
    /// the coordinator already computed, so no reader ever sees the recipe
    /// unscored.
    async fn insert(&self, recipe: &Recipe) -> AppResult<Recipe>;

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Recipe>>;

    async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Recipe>>;

    async fn list(&self, filter: &RecipeFilter) -> AppResult<Vec<Recipe>>;

    async fn list_for_user(&self, user_id: &Uuid) -> AppResult<Vec<Recipe>>;

    /// Persist the user-editable fields only. The computed columns are not
    /// part of the update statement.
    async fn update_details(&self, recipe: &Recipe) -> AppResult<Recipe>;

    /// Delete the recipe; ingredients, instructions and reviews go with it
    /// via the schema's cascades.
    async fn delete(&self, id: &Uuid) -> AppResult<()>;

    /// Write `nutritional_value` and nothing else.
    async fn apply_nutrition(&self, recipe_id: &Uuid, score: i32) -> AppResult<()>;

    /// Write `media_score` and nothing else.
    async fn apply_media_score(&self, recipe_id: &Uuid, score: f64) -> AppResult<()>;
}
