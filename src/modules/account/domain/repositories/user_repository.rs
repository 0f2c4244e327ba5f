use async_trait::async_trait;
use uuid::Uuid;

use super::super::entities::user::User;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<User>>;
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
    async fn save(&self, user: &User) -> AppResult<User>;

    // Favorites (many-to-many User <-> Recipe, independent of the
    // computed-field pipeline)
    async fn is_favorite(&self, user_id: &Uuid, recipe_id: &Uuid) -> AppResult<bool>;
    async fn add_favorite(&self, user_id: &Uuid, recipe_id: &Uuid) -> AppResult<()>;
    async fn remove_favorite(&self, user_id: &Uuid, recipe_id: &Uuid) -> AppResult<()>;
    async fn favorite_recipe_ids(&self, user_id: &Uuid) -> AppResult<Vec<Uuid>>;
}
