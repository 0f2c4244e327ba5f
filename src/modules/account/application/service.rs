use std::sync::Arc;
use uuid::Uuid;

use super::super::domain::{
    entities::user::{User, UserRole},
    repositories::user_repository::UserRepository,
};
use crate::log_debug;
use crate::modules::recipe::domain::{
    entities::recipe::Recipe, repositories::recipe_repository::RecipeRepository,
};
use crate::shared::errors::{AppError, AppResult};

pub struct AccountService {
    user_repo: Arc<dyn UserRepository>,
    recipe_repo: Arc<dyn RecipeRepository>,
}

impl AccountService {
    pub fn new(user_repo: Arc<dyn UserRepository>, recipe_repo: Arc<dyn RecipeRepository>) -> Self {
        Self {
            user_repo,
            recipe_repo,
        }
    }

    pub async fn register_user(&self, username: &str, role: UserRole) -> AppResult<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::ValidationError(
                "Username cannot be empty".to_string(),
            ));
        }

        if self.user_repo.find_by_username(username).await?.is_some() {
            return Err(AppError::ValidationError(format!(
                "Username '{}' is already taken",
                username
            )));
        }

        let user = User::new(username.to_string(), role);
        self.user_repo.save(&user).await
    }

    pub async fn get_user(&self, id: &Uuid) -> AppResult<Option<User>> {
        self.user_repo.find_by_id(id).await
    }

    /// Flip the favorite relation between a user and a recipe.
    ///
    /// Returns true when the recipe is a favorite after the call.
    pub async fn toggle_favorite(&self, user_id: &Uuid, recipe_id: &Uuid) -> AppResult<bool> {
        // Toggling against a deleted recipe is a NotFound, not a silent no-op
        if self.recipe_repo.find_by_id(recipe_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Recipe {} not found",
                recipe_id
            )));
        }

        if self.user_repo.is_favorite(user_id, recipe_id).await? {
            self.user_repo.remove_favorite(user_id, recipe_id).await?;
            log_debug!("User {} removed favorite {}", user_id, recipe_id);
            Ok(false)
        } else {
            self.user_repo.add_favorite(user_id, recipe_id).await?;
            log_debug!("User {} added favorite {}", user_id, recipe_id);
            Ok(true)
        }
    }

    pub async fn favorite_recipes(&self, user_id: &Uuid) -> AppResult<Vec<Recipe>> {
        let ids = self.user_repo.favorite_recipe_ids(user_id).await?;
        self.recipe_repo.find_by_ids(&ids).await
    }
}
