use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use super::recipe_model::{RecipeDetailsChangeset, RecipeModel};
use crate::log_debug;
use crate::modules::recipe::domain::{
    entities::recipe::Recipe,
    repositories::recipe_repository::{RecipeFilter, RecipeRepository},
};
use crate::schema::{ingredients, recipes};
use crate::shared::errors::AppResult;
use crate::shared::Database;

pub struct RecipeRepositoryImpl {
    db: Arc<Database>,
}

impl RecipeRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RecipeRepository for RecipeRepositoryImpl {
    async fn insert(&self, recipe: &Recipe) -> AppResult<Recipe> {
        let db = Arc::clone(&self.db);
        let model = RecipeModel::from_entity(recipe);

        let saved = task::spawn_blocking(move || -> AppResult<RecipeModel> {
            let mut conn = db.get_connection()?;
            log_debug!("Inserting recipe {} ('{}')", model.id, model.title);
            let m = diesel::insert_into(recipes::table)
                .values(&model)
                .get_result::<RecipeModel>(&mut conn)?;
            Ok(m)
        })
        .await??;

        Ok(saved.into_entity())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Recipe>> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let model = task::spawn_blocking(move || -> AppResult<Option<RecipeModel>> {
            let mut conn = db.get_connection()?;
            let m = recipes::table
                .filter(recipes::id.eq(id))
                .first::<RecipeModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(RecipeModel::into_entity))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Recipe>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let db = Arc::clone(&self.db);
        let ids = ids.to_vec();

        let models = task::spawn_blocking(move || -> AppResult<Vec<RecipeModel>> {
            let mut conn = db.get_connection()?;
            let ms = recipes::table
                .filter(recipes::id.eq_any(&ids))
                .load::<RecipeModel>(&mut conn)?;
            Ok(ms)
        })
        .await??;

        Ok(models.into_iter().map(RecipeModel::into_entity).collect())
    }

    async fn list(&self, filter: &RecipeFilter) -> AppResult<Vec<Recipe>> {
        let db = Arc::clone(&self.db);
        let filter = filter.clone();

        let models = task::spawn_blocking(move || -> AppResult<Vec<RecipeModel>> {
            let mut conn = db.get_connection()?;

            let mut query = recipes::table.into_boxed();

            if let Some(title) = filter.title_contains {
                let pattern = format!("%{}%", title);
                query = query.filter(recipes::title.ilike(pattern));
            }
            if let Some(type_id) = filter.ingredient_type_id {
                let with_type = ingredients::table
                    .filter(ingredients::ingredient_type_id.eq(type_id))
                    .select(ingredients::recipe_id);
                query = query.filter(recipes::id.eq_any(with_type));
            }
            if let Some(min) = filter.min_nutritional_value {
                query = query.filter(recipes::nutritional_value.ge(min));
            }
            if let Some(max) = filter.max_nutritional_value {
                query = query.filter(recipes::nutritional_value.le(max));
            }

            let ms = query
                .order(recipes::created_at.desc())
                .load::<RecipeModel>(&mut conn)?;
            Ok(ms)
        })
        .await??;

        Ok(models.into_iter().map(RecipeModel::into_entity).collect())
    }

    async fn list_for_user(&self, user_id: &Uuid) -> AppResult<Vec<Recipe>> {
        let db = Arc::clone(&self.db);
        let user_id = *user_id;

        let models = task::spawn_blocking(move || -> AppResult<Vec<RecipeModel>> {
            let mut conn = db.get_connection()?;
            let ms = recipes::table
                .filter(recipes::user_id.eq(user_id))
                .order(recipes::created_at.desc())
                .load::<RecipeModel>(&mut conn)?;
            Ok(ms)
        })
        .await??;

        Ok(models.into_iter().map(RecipeModel::into_entity).collect())
    }

    async fn update_details(&self, recipe: &Recipe) -> AppResult<Recipe> {
        let db = Arc::clone(&self.db);
        let changeset = RecipeDetailsChangeset::from_entity(recipe);
        let id = recipe.id;

        let updated = task::spawn_blocking(move || -> AppResult<RecipeModel> {
            let mut conn = db.get_connection()?;
            let m = diesel::update(recipes::table.filter(recipes::id.eq(id)))
                .set(&changeset)
                .get_result::<RecipeModel>(&mut conn)?;
            Ok(m)
        })
        .await??;

        Ok(updated.into_entity())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let id = *id;

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            diesel::delete(recipes::table.filter(recipes::id.eq(id))).execute(&mut conn)?;
            Ok(())
        })
        .await??;

        Ok(())
    }

    async fn apply_nutrition(&self, recipe_id: &Uuid, score: i32) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let recipe_id = *recipe_id;

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            diesel::update(recipes::table.filter(recipes::id.eq(recipe_id)))
                .set(recipes::nutritional_value.eq(score))
                .execute(&mut conn)?;
            Ok(())
        })
        .await??;

        Ok(())
    }

    async fn apply_media_score(&self, recipe_id: &Uuid, score: f64) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let recipe_id = *recipe_id;

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            diesel::update(recipes::table.filter(recipes::id.eq(recipe_id)))
                .set(recipes::media_score.eq(score))
                .execute(&mut conn)?;
            Ok(())
        })
        .await??;

        Ok(())
    }
}
