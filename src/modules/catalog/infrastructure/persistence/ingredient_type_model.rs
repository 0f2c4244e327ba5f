use diesel::prelude::*;
use uuid::Uuid;

use crate::modules::catalog::domain::entities::ingredient_type::{
    IngredientCategory, IngredientType,
};
use crate::schema::ingredient_types;

#[derive(Queryable, Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = ingredient_types)]
pub struct IngredientTypeModel {
    pub id: Uuid,
    pub name: String,
    pub category: IngredientCategory,
    pub vitamins: Option<serde_json::Value>,
    pub excesses: Option<serde_json::Value>,
    pub user_id: Option<Uuid>,
}

impl IngredientTypeModel {
    pub fn from_entity(entity: &IngredientType) -> Self {
        Self {
            id: entity.id,
            name: entity.name.clone(),
            category: entity.category,
            vitamins: Self::tags_to_json(&entity.vitamins),
            excesses: Self::tags_to_json(&entity.excesses),
            user_id: entity.user_id,
        }
    }

    pub fn into_entity(self) -> IngredientType {
        IngredientType {
            id: self.id,
            name: self.name,
            category: self.category,
            vitamins: Self::json_to_tags(self.vitamins),
            excesses: Self::json_to_tags(self.excesses),
            user_id: self.user_id,
        }
    }

    fn tags_to_json(tags: &[String]) -> Option<serde_json::Value> {
        if tags.is_empty() {
            None
        } else {
            Some(serde_json::to_value(tags).unwrap_or(serde_json::Value::Null))
        }
    }

    fn json_to_tags(value: Option<serde_json::Value>) -> Vec<String> {
        value
            .and_then(|v| serde_json::from_value::<Vec<String>>(v).ok())
            .unwrap_or_default()
    }
}
