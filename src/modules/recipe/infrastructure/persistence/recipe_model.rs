use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::modules::recipe::domain::entities::recipe::Recipe;
use crate::schema::recipes;

#[derive(Queryable, Insertable, Debug, Clone)]
#[diesel(table_name = recipes)]
pub struct RecipeModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub preparation_time_minutes: i32,
    pub portions: i32,
    pub nutritional_value: i32,
    pub media_score: f64,
    pub created_at: DateTime<Utc>,
}

/// Changeset limited to the user-editable columns. Using it for updates is
/// what keeps `update_details` from ever writing the computed fields.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = recipes)]
pub struct RecipeDetailsChangeset {
    pub title: String,
    pub description: String,
    pub category: String,
    pub preparation_time_minutes: i32,
    pub portions: i32,
}

impl RecipeModel {
    pub fn from_entity(entity: &Recipe) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title.clone(),
            description: entity.description.clone(),
            category: entity.category.clone(),
            preparation_time_minutes: entity.preparation_time_minutes,
            portions: entity.portions,
            nutritional_value: entity.nutritional_value,
            media_score: entity.media_score,
            created_at: entity.created_at,
        }
    }

    pub fn into_entity(self) -> Recipe {
        Recipe {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            description: self.description,
            category: self.category,
            preparation_time_minutes: self.preparation_time_minutes,
            portions: self.portions,
            nutritional_value: self.nutritional_value,
            media_score: self.media_score,
            created_at: self.created_at,
        }
    }
}

impl RecipeDetailsChangeset {
    pub fn from_entity(entity: &Recipe) -> Self {
        Self {
            title: entity.title.clone(),
            description: entity.description.clone(),
            category: entity.category.clone(),
            preparation_time_minutes: entity.preparation_time_minutes,
            portions: entity.portions,
        }
    }
}
