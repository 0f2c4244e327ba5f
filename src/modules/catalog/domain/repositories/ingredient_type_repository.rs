use async_trait::async_trait;
use uuid::Uuid;

use super::super::entities::ingredient_type::IngredientType;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait IngredientTypeRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<IngredientType>>;
    /// Case-insensitive lookup (names are stored lowercase)
    async fn find_by_name(&self, name: &str) -> AppResult<Option<IngredientType>>;
    async fn get_all(&self) -> AppResult<Vec<IngredientType>>;
    async fn save(&self, ingredient_type: &IngredientType) -> AppResult<IngredientType>;
    async fn update(&self, ingredient_type: &IngredientType) -> AppResult<IngredientType>;
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
}
