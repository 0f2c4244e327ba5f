use async_trait::async_trait;
use uuid::Uuid;

use super::super::entities::review::Review;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Insert a review in its own transaction.
    ///
    /// Returning Ok means the row is committed; the media-score update that
    /// follows must happen strictly after this call so it observes the row.
    async fn insert(&self, review: &Review) -> AppResult<Review>;

    /// All scores for a recipe, read from committed state.
    async fn scores_for_recipe(&self, recipe_id: &Uuid) -> AppResult<Vec<i32>>;

    async fn list_for_recipe(&self, recipe_id: &Uuid) -> AppResult<Vec<Review>>;
}
