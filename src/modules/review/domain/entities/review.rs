use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's rating of a recipe.
///
/// A user may review the same recipe several times; each review is an
/// independent entry and all of them feed the recipe's media score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub user_id: Uuid,
    pub score: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(recipe_id: Uuid, user_id: Uuid, score: i32, comment: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            recipe_id,
            user_id,
            score,
            comment,
            created_at: Utc::now(),
        }
    }
}
