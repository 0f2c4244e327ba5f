use diesel::prelude::*;
use uuid::Uuid;

use crate::modules::recipe::domain::entities::ingredient::Ingredient;
use crate::schema::ingredients;

#[derive(Queryable, Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = ingredients)]
pub struct IngredientModel {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub ingredient_type_id: Uuid,
    pub quantity: f64,
    pub unit: String,
}

impl IngredientModel {
    pub fn from_entity(entity: &Ingredient) -> Self {
        Self {
            id: entity.id,
            recipe_id: entity.recipe_id,
            ingredient_type_id: entity.ingredient_type_id,
            quantity: entity.quantity,
            unit: entity.unit.clone(),
        }
    }

    pub fn into_entity(self) -> Ingredient {
        Ingredient {
            id: self.id,
            recipe_id: self.recipe_id,
            ingredient_type_id: self.ingredient_type_id,
            quantity: self.quantity,
            unit: self.unit,
        }
    }
}
