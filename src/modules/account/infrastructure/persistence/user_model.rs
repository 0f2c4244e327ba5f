use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::modules::account::domain::entities::user::{User, UserRole};
use crate::schema::{user_favorite_recipes, users};

#[derive(Queryable, Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = users)]
pub struct UserModel {
    pub id: Uuid,
    pub username: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl UserModel {
    pub fn from_entity(entity: &User) -> Self {
        Self {
            id: entity.id,
            username: entity.username.clone(),
            role: entity.role,
            created_at: entity.created_at,
        }
    }

    pub fn into_entity(self) -> User {
        User {
            id: self.id,
            username: self.username,
            role: self.role,
            created_at: self.created_at,
        }
    }
}

#[derive(Queryable, Insertable, Debug, Clone)]
#[diesel(table_name = user_favorite_recipes)]
pub struct FavoriteModel {
    pub user_id: Uuid,
    pub recipe_id: Uuid,
    pub added_at: DateTime<Utc>,
}
