use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use super::ingredient_model::IngredientModel;
use crate::log_debug;
use crate::modules::catalog::domain::entities::ingredient_type::IngredientCategory;
use crate::modules::recipe::domain::{
    entities::ingredient::Ingredient,
    repositories::ingredient_repository::{IngredientRepository, IngredientWithType},
};
use crate::schema::{ingredient_types, ingredients, recipes};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::Database;

type JoinedRow = (
    IngredientModel,
    String,
    IngredientCategory,
    Option<serde_json::Value>,
    Option<serde_json::Value>,
);

pub struct IngredientRepositoryImpl {
    db: Arc<Database>,
}

impl IngredientRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn json_to_tags(value: Option<serde_json::Value>) -> Vec<String> {
        value
            .and_then(|v| serde_json::from_value::<Vec<String>>(v).ok())
            .unwrap_or_default()
    }

    fn row_to_joined(row: JoinedRow) -> IngredientWithType {
        let (model, type_name, category, vitamins, excesses) = row;
        IngredientWithType {
            ingredient: model.into_entity(),
            type_name,
            category,
            vitamins: Self::json_to_tags(vitamins),
            excesses: Self::json_to_tags(excesses),
        }
    }
}

#[async_trait]
impl IngredientRepository for IngredientRepositoryImpl {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Ingredient>> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let model = task::spawn_blocking(move || -> AppResult<Option<IngredientModel>> {
            let mut conn = db.get_connection()?;
            let m = ingredients::table
                .filter(ingredients::id.eq(id))
                .first::<IngredientModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(IngredientModel::into_entity))
    }

    async fn list_with_types(&self, recipe_id: &Uuid) -> AppResult<Vec<IngredientWithType>> {
        let db = Arc::clone(&self.db);
        let recipe_id = *recipe_id;

        let rows = task::spawn_blocking(move || -> AppResult<Vec<JoinedRow>> {
            let mut conn = db.get_connection()?;
            let rows = ingredients::table
                .inner_join(ingredient_types::table)
                .filter(ingredients::recipe_id.eq(recipe_id))
                .select((
                    ingredients::all_columns,
                    ingredient_types::name,
                    ingredient_types::category,
                    ingredient_types::vitamins,
                    ingredient_types::excesses,
                ))
                .load::<JoinedRow>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(rows.into_iter().map(Self::row_to_joined).collect())
    }

    async fn insert_rescoring(
        &self,
        ingredient: &Ingredient,
        nutritional_value: i32,
    ) -> AppResult<Ingredient> {
        let db = Arc::clone(&self.db);
        let model = IngredientModel::from_entity(ingredient);

        let saved = task::spawn_blocking(move || -> AppResult<IngredientModel> {
            let mut conn = db.get_connection()?;

            conn.transaction::<IngredientModel, AppError, _>(|conn| {
                log_debug!(
                    "Inserting ingredient {} and rescoring recipe {}",
                    model.id,
                    model.recipe_id
                );
                let m = diesel::insert_into(ingredients::table)
                    .values(&model)
                    .get_result::<IngredientModel>(conn)?;

                diesel::update(recipes::table.filter(recipes::id.eq(m.recipe_id)))
                    .set(recipes::nutritional_value.eq(nutritional_value))
                    .execute(conn)?;

                Ok(m)
            })
        })
        .await??;

        Ok(saved.into_entity())
    }

    async fn update_rescoring(
        &self,
        ingredient: &Ingredient,
        nutritional_value: i32,
    ) -> AppResult<Ingredient> {
        let db = Arc::clone(&self.db);
        let model = IngredientModel::from_entity(ingredient);
        let id = ingredient.id;

        let updated = task::spawn_blocking(move || -> AppResult<IngredientModel> {
            let mut conn = db.get_connection()?;

            conn.transaction::<IngredientModel, AppError, _>(|conn| {
                let m = diesel::update(ingredients::table.filter(ingredients::id.eq(id)))
                    .set(&model)
                    .get_result::<IngredientModel>(conn)?;

                diesel::update(recipes::table.filter(recipes::id.eq(m.recipe_id)))
                    .set(recipes::nutritional_value.eq(nutritional_value))
                    .execute(conn)?;

                Ok(m)
            })
        })
        .await??;

        Ok(updated.into_entity())
    }

    async fn delete_rescoring(
        &self,
        ingredient_id: &Uuid,
        recipe_id: &Uuid,
        nutritional_value: i32,
    ) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let ingredient_id = *ingredient_id;
        let recipe_id = *recipe_id;

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;

            conn.transaction::<(), AppError, _>(|conn| {
                log_debug!(
                    "Deleting ingredient {} and rescoring recipe {}",
                    ingredient_id,
                    recipe_id
                );
                diesel::delete(ingredients::table.filter(ingredients::id.eq(ingredient_id)))
                    .execute(conn)?;

                diesel::update(recipes::table.filter(recipes::id.eq(recipe_id)))
                    .set(recipes::nutritional_value.eq(nutritional_value))
                    .execute(conn)?;

                Ok(())
            })
        })
        .await??;

        Ok(())
    }
}
