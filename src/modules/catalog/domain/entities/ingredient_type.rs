use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Broad nutritional category of an ingredient type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, DbEnum)]
#[ExistingTypePath = "crate::schema::sql_types::IngredientCategory"]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    Vegetal,
    Animal,
    Mineral,
    Procesado,
    Ultraprocesado,
}

/// Catalog entry an ingredient references: a food stuff plus the nutrition
/// tags the scoring prompt mentions.
///
/// Names are stored lowercase; uniqueness is case-insensitive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientType {
    pub id: Uuid,
    pub name: String,
    pub category: IngredientCategory,
    pub vitamins: Vec<String>,
    pub excesses: Vec<String>,
    pub user_id: Option<Uuid>,
}

impl IngredientType {
    pub fn new(name: &str, category: IngredientCategory, user_id: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: Self::normalize_name(name),
            category,
            vitamins: Vec::new(),
            excesses: Vec::new(),
            user_id,
        }
    }

    pub fn with_vitamins(mut self, vitamins: Vec<String>) -> Self {
        self.vitamins = vitamins;
        self
    }

    pub fn with_excesses(mut self, excesses: Vec<String>) -> Self {
        self.excesses = excesses;
        self
    }

    pub fn rename(&mut self, name: &str) {
        self.name = Self::normalize_name(name);
    }

    pub fn normalize_name(name: &str) -> String {
        name.trim().to_lowercase()
    }

    pub fn is_owned_by(&self, user_id: &Uuid) -> bool {
        self.user_id.as_ref() == Some(user_id)
    }
}
