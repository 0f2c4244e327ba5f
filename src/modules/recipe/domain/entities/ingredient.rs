use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A quantity of some catalog ingredient type inside one recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub ingredient_type_id: Uuid,
    pub quantity: f64,
    pub unit: String,
}

impl Ingredient {
    pub fn new(recipe_id: Uuid, ingredient_type_id: Uuid, quantity: f64, unit: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            recipe_id,
            ingredient_type_id,
            quantity,
            unit,
        }
    }
}
