use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use super::instruction_model::InstructionModel;
use crate::modules::recipe::domain::{
    entities::instruction::Instruction,
    repositories::instruction_repository::InstructionRepository,
};
use crate::schema::instructions;
use crate::shared::errors::AppResult;
use crate::shared::Database;

pub struct InstructionRepositoryImpl {
    db: Arc<Database>,
}

impl InstructionRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InstructionRepository for InstructionRepositoryImpl {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Instruction>> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let model = task::spawn_blocking(move || -> AppResult<Option<InstructionModel>> {
            let mut conn = db.get_connection()?;
            let m = instructions::table
                .filter(instructions::id.eq(id))
                .first::<InstructionModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(InstructionModel::into_entity))
    }

    async fn insert(&self, instruction: &Instruction) -> AppResult<Instruction> {
        let db = Arc::clone(&self.db);
        let model = InstructionModel::from_entity(instruction);

        let saved = task::spawn_blocking(move || -> AppResult<InstructionModel> {
            let mut conn = db.get_connection()?;
            let m = diesel::insert_into(instructions::table)
                .values(&model)
                .get_result::<InstructionModel>(&mut conn)?;
            Ok(m)
        })
        .await??;

        Ok(saved.into_entity())
    }

    async fn update(&self, instruction: &Instruction) -> AppResult<Instruction> {
        let db = Arc::clone(&self.db);
        let model = InstructionModel::from_entity(instruction);
        let id = instruction.id;

        let updated = task::spawn_blocking(move || -> AppResult<InstructionModel> {
            let mut conn = db.get_connection()?;
            let m = diesel::update(instructions::table.filter(instructions::id.eq(id)))
                .set(&model)
                .get_result::<InstructionModel>(&mut conn)?;
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
            diesel::delete(instructions::table.filter(instructions::id.eq(id)))
                .execute(&mut conn)?;
            Ok(())
        })
        .await??;

        Ok(())
    }

    async fn list_for_recipe(&self, recipe_id: &Uuid) -> AppResult<Vec<Instruction>> {
        let db = Arc::clone(&self.db);
        let recipe_id = *recipe_id;

        let models = task::spawn_blocking(move || -> AppResult<Vec<InstructionModel>> {
            let mut conn = db.get_connection()?;
            let ms = instructions::table
                .filter(instructions::recipe_id.eq(recipe_id))
                .order(instructions::step_number.asc())
                .load::<InstructionModel>(&mut conn)?;
            Ok(ms)
        })
        .await??;

        Ok(models.into_iter().map(InstructionModel::into_entity).collect())
    }
}
