use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use super::ingredient_type_model::IngredientTypeModel;
use crate::modules::catalog::domain::{
    entities::ingredient_type::IngredientType,
    repositories::ingredient_type_repository::IngredientTypeRepository,
};
use crate::schema::ingredient_types;
use crate::shared::errors::AppResult;
use crate::shared::Database;

pub struct IngredientTypeRepositoryImpl {
    db: Arc<Database>,
}

impl IngredientTypeRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IngredientTypeRepository for IngredientTypeRepositoryImpl {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<IngredientType>> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let model = task::spawn_blocking(move || -> AppResult<Option<IngredientTypeModel>> {
            let mut conn = db.get_connection()?;
            let m = ingredient_types::table
                .filter(ingredient_types::id.eq(id))
                .first::<IngredientTypeModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(IngredientTypeModel::into_entity))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<IngredientType>> {
        let db = Arc::clone(&self.db);
        // Stored names are lowercase, so an eq on the lowered input is a
        // case-insensitive match
        let lowered = IngredientType::normalize_name(name);

        let model = task::spawn_blocking(move || -> AppResult<Option<IngredientTypeModel>> {
            let mut conn = db.get_connection()?;
            let m = ingredient_types::table
                .filter(ingredient_types::name.eq(lowered))
                .first::<IngredientTypeModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(IngredientTypeModel::into_entity))
    }

    async fn get_all(&self) -> AppResult<Vec<IngredientType>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<IngredientTypeModel>> {
            let mut conn = db.get_connection()?;
            let ms = ingredient_types::table
                .order(ingredient_types::name.asc())
                .load::<IngredientTypeModel>(&mut conn)?;
            Ok(ms)
        })
        .await??;

        Ok(models
            .into_iter()
            .map(IngredientTypeModel::into_entity)
            .collect())
    }

    async fn save(&self, ingredient_type: &IngredientType) -> AppResult<IngredientType> {
        let db = Arc::clone(&self.db);
        let model = IngredientTypeModel::from_entity(ingredient_type);

        let saved = task::spawn_blocking(move || -> AppResult<IngredientTypeModel> {
            let mut conn = db.get_connection()?;
            let m = diesel::insert_into(ingredient_types::table)
                .values(&model)
                .get_result::<IngredientTypeModel>(&mut conn)?;
            Ok(m)
        })
        .await??;

        Ok(saved.into_entity())
    }

    async fn update(&self, ingredient_type: &IngredientType) -> AppResult<IngredientType> {
        let db = Arc::clone(&self.db);
        let model = IngredientTypeModel::from_entity(ingredient_type);
        let id = ingredient_type.id;

        let updated = task::spawn_blocking(move || -> AppResult<IngredientTypeModel> {
            let mut conn = db.get_connection()?;
            let m = diesel::update(ingredient_types::table.filter(ingredient_types::id.eq(id)))
                .set(&model)
                .get_result::<IngredientTypeModel>(&mut conn)?;
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
            diesel::delete(ingredient_types::table.filter(ingredient_types::id.eq(id)))
                .execute(&mut conn)?;
            Ok(())
        })
        .await??;

        Ok(())
    }
}
