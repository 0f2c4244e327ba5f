use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::modules::review::domain::entities::review::Review;
use crate::schema::reviews;

#[derive(Queryable, Insertable, Debug, Clone)]
#[diesel(table_name = reviews)]
pub struct ReviewModel {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub user_id: Uuid,
    pub score: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ReviewModel {
    pub fn from_entity(entity: &Review) -> Self {
        Self {
            id: entity.id,
            recipe_id: entity.recipe_id,
            user_id: entity.user_id,
            score: entity.score,
            comment: entity.comment.clone(),
            created_at: entity.created_at,
        }
    }

    pub fn into_entity(self) -> Review {
        Review {
            id: self.id,
            recipe_id: self.recipe_id,
            user_id: self.user_id,
            score: self.score,
            comment: self.comment,
            created_at: self.created_at,
        }
    }
}
