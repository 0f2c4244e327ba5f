use diesel::prelude::*;
use uuid::Uuid;

use crate::modules::recipe::domain::entities::instruction::Instruction;
use crate::schema::instructions;

#[derive(Queryable, Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = instructions)]
pub struct InstructionModel {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub title: String,
    pub details: String,
    pub complexity: i32,
    pub step_number: i32,
}

impl InstructionModel {
    pub fn from_entity(entity: &Instruction) -> Self {
        Self {
            id: entity.id,
            recipe_id: entity.recipe_id,
            title: entity.title.clone(),
            details: entity.details.clone(),
            complexity: entity.complexity,
            step_number: entity.step_number,
        }
    }

    pub fn into_entity(self) -> Instruction {
        Instruction {
            id: self.id,
            recipe_id: self.recipe_id,
            title: self.title,
            details: self.details,
            complexity: self.complexity,
            step_number: self.step_number,
        }
    }
}
