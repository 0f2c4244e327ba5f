//! Test data factories with sensible defaults.

use std::sync::Arc;

use uuid::Uuid;

use yum_lib::modules::account::domain::entities::user::{User, UserRole};
use yum_lib::modules::catalog::domain::entities::ingredient_type::{
    IngredientCategory, IngredientType,
};

use super::fakes::InMemoryStore;

pub struct UserFactory {
    username: String,
    role: UserRole,
}

impl Default for UserFactory {
    fn default() -> Self {
        Self {
            // Unique by default so parallel tests never collide on username
            username: format!("user-{}", rand::random::<u32>() % 1000000),
            role: UserRole::Common,
        }
    }
}

impl UserFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_username(mut self, username: &str) -> Self {
        self.username = username.to_string();
        self
    }

    pub fn admin(mut self) -> Self {
        self.role = UserRole::Admin;
        self
    }

    pub fn build(self) -> User {
        User::new(self.username, self.role)
    }
}

pub fn common_user(username: &str) -> User {
    UserFactory::new().with_username(username).build()
}

pub fn admin_user() -> User {
    UserFactory::new().with_username("boss").admin().build()
}

/// Put an ingredient type straight into the store, bypassing the catalog
/// service, and return it.
pub fn seed_ingredient_type(
    store: &Arc<InMemoryStore>,
    name: &str,
    category: IngredientCategory,
    owner: Option<Uuid>,
) -> IngredientType {
    let tipo = IngredientType::new(name, category, owner);
    store
        .ingredient_types
        .lock()
        .unwrap()
        .insert(tipo.id, tipo.clone());
    tipo
}
