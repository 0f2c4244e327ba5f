use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Recipe aggregate root.
///
/// `nutritional_value` and `media_score` are derived from related rows and
/// are never accepted as user input; the only writers are
/// [`apply_nutrition`](Recipe::apply_nutrition) and
/// [`apply_media_score`](Recipe::apply_media_score), each persisted as a
/// single-field update so concurrent edits to unrelated fields are not
/// clobbered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
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

impl Recipe {
    pub fn new(
        user_id: Uuid,
        title: String,
        description: String,
        category: String,
        preparation_time_minutes: i32,
        portions: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            description,
            category,
            preparation_time_minutes,
            portions,
            // Derived fields; the coordinator fills them in
            nutritional_value: 0,
            media_score: 0.0,
            created_at: Utc::now(),
        }
    }

    pub fn apply_nutrition(&mut self, score: i32) {
        self.nutritional_value = score;
    }

    pub fn apply_media_score(&mut self, score: f64) {
        self.media_score = score;
    }

    pub fn is_owned_by(&self, user_id: &Uuid) -> bool {
        self.user_id == *user_id
    }
}
