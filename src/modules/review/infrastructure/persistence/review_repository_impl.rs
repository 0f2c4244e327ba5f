use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use super::review_model::ReviewModel;
use crate::log_debug;
use crate::modules::review::domain::{
    entities::review::Review, repositories::review_repository::ReviewRepository,
};
use crate::schema::reviews;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::Database;

pub struct ReviewRepositoryImpl {
    db: Arc<Database>,
}

impl ReviewRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryImpl {
    async fn insert(&self, review: &Review) -> AppResult<Review> {
        let db = Arc::clone(&self.db);
        let model = ReviewModel::from_entity(review);

        let saved = task::spawn_blocking(move || -> AppResult<ReviewModel> {
            let mut conn = db.get_connection()?;

            conn.transaction::<ReviewModel, AppError, _>(|conn| {
                log_debug!(
                    "Inserting review {} for recipe {}",
                    model.id,
                    model.recipe_id
                );
                let m = diesel::insert_into(reviews::table)
                    .values(&model)
                    .get_result::<ReviewModel>(conn)?;
                Ok(m)
            })
        })
        .await??;

        Ok(saved.into_entity())
    }

    async fn scores_for_recipe(&self, recipe_id: &Uuid) -> AppResult<Vec<i32>> {
        let db = Arc::clone(&self.db);
        let recipe_id = *recipe_id;

        let scores = task::spawn_blocking(move || -> AppResult<Vec<i32>> {
            let mut conn = db.get_connection()?;
            let scores = reviews::table
                .filter(reviews::recipe_id.eq(recipe_id))
                .select(reviews::score)
                .load::<i32>(&mut conn)?;
            Ok(scores)
        })
        .await??;

        Ok(scores)
    }

    async fn list_for_recipe(&self, recipe_id: &Uuid) -> AppResult<Vec<Review>> {
        let db = Arc::clone(&self.db);
        let recipe_id = *recipe_id;

        let models = task::spawn_blocking(move || -> AppResult<Vec<ReviewModel>> {
            let mut conn = db.get_connection()?;
            let ms = reviews::table
                .filter(reviews::recipe_id.eq(recipe_id))
                .order(reviews::created_at.desc())
                .load::<ReviewModel>(&mut conn)?;
            Ok(ms)
        })
        .await??;

        Ok(models.into_iter().map(ReviewModel::into_entity).collect())
    }
}
