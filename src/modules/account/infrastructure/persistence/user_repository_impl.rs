use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use super::user_model::{FavoriteModel, UserModel};
use crate::modules::account::domain::{
    entities::user::User, repositories::user_repository::UserRepository,
};
use crate::schema::{user_favorite_recipes, users};
use crate::shared::errors::AppResult;
use crate::shared::Database;

pub struct UserRepositoryImpl {
    db: Arc<Database>,
}

impl UserRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<User>> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let model = task::spawn_blocking(move || -> AppResult<Option<UserModel>> {
            let mut conn = db.get_connection()?;
            let m = users::table
                .filter(users::id.eq(id))
                .first::<UserModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(UserModel::into_entity))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let db = Arc::clone(&self.db);
        let username = username.to_string();

        let model = task::spawn_blocking(move || -> AppResult<Option<UserModel>> {
            let mut conn = db.get_connection()?;
            let m = users::table
                .filter(users::username.eq(username))
                .first::<UserModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(UserModel::into_entity))
    }

    async fn save(&self, user: &User) -> AppResult<User> {
        let db = Arc::clone(&self.db);
        let model = UserModel::from_entity(user);

        let saved = task::spawn_blocking(move || -> AppResult<UserModel> {
            let mut conn = db.get_connection()?;
            let m = diesel::insert_into(users::table)
                .values(&model)
                .get_result::<UserModel>(&mut conn)?;
            Ok(m)
        })
        .await??;

        Ok(saved.into_entity())
    }

    async fn is_favorite(&self, user_id: &Uuid, recipe_id: &Uuid) -> AppResult<bool> {
        let db = Arc::clone(&self.db);
        let user_id = *user_id;
        let recipe_id = *recipe_id;

        let count = task::spawn_blocking(move || -> AppResult<i64> {
            let mut conn = db.get_connection()?;
            let n = user_favorite_recipes::table
                .filter(user_favorite_recipes::user_id.eq(user_id))
                .filter(user_favorite_recipes::recipe_id.eq(recipe_id))
                .count()
                .get_result::<i64>(&mut conn)?;
            Ok(n)
        })
        .await??;

        Ok(count > 0)
    }

    async fn add_favorite(&self, user_id: &Uuid, recipe_id: &Uuid) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let model = FavoriteModel {
            user_id: *user_id,
            recipe_id: *recipe_id,
            added_at: Utc::now(),
        };

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            diesel::insert_into(user_favorite_recipes::table)
                .values(&model)
                .on_conflict_do_nothing()
                .execute(&mut conn)?;
            Ok(())
        })
        .await??;

        Ok(())
    }

    async fn remove_favorite(&self, user_id: &Uuid, recipe_id: &Uuid) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let user_id = *user_id;
        let recipe_id = *recipe_id;

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            diesel::delete(
                user_favorite_recipes::table
                    .filter(user_favorite_recipes::user_id.eq(user_id))
                    .filter(user_favorite_recipes::recipe_id.eq(recipe_id)),
            )
            .execute(&mut conn)?;
            Ok(())
        })
        .await??;

        Ok(())
    }

    async fn favorite_recipe_ids(&self, user_id: &Uuid) -> AppResult<Vec<Uuid>> {
        let db = Arc::clone(&self.db);
        let user_id = *user_id;

        let ids = task::spawn_blocking(move || -> AppResult<Vec<Uuid>> {
            let mut conn = db.get_connection()?;
            let ids = user_favorite_recipes::table
                .filter(user_favorite_recipes::user_id.eq(user_id))
                .order(user_favorite_recipes::added_at.desc())
                .select(user_favorite_recipes::recipe_id)
                .load::<Uuid>(&mut conn)?;
            Ok(ids)
        })
        .await??;

        Ok(ids)
    }
}
