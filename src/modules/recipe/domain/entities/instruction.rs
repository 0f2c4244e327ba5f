use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One preparation step of a recipe. Instruction mutations never trigger a
/// recompute of the derived recipe fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instruction {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub title: String,
    pub details: String,
    pub complexity: i32,
    pub step_number: i32,
}

impl Instruction {
    pub fn new(
        recipe_id: Uuid,
        title: String,
        details: String,
        complexity: i32,
        step_number: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            recipe_id,
            title,
            details,
            complexity,
            step_number,
        }
    }
}
