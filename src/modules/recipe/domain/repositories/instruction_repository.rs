use async_trait::async_trait;
use uuid::Uuid;

use super::super::entities::instruction::Instruction;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait InstructionRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Instruction>>;
    async fn insert(&self, instruction: &Instruction) -> AppResult<Instruction>;
    async fn update(&self, instruction: &Instruction) -> AppResult<Instruction>;
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
    async fn list_for_recipe(&self, recipe_id: &Uuid) -> AppResult<Vec<Instruction>>;
}
