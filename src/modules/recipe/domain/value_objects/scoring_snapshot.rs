use serde::Serialize;

use crate::modules::catalog::domain::entities::ingredient_type::IngredientCategory;
use crate::modules::recipe::domain::entities::recipe::Recipe;
use crate::modules::recipe::domain::repositories::ingredient_repository::IngredientWithType;

/// Immutable view of a recipe at the moment a nutrition recompute is
/// requested: the user-facing fields plus the full ingredient list.
///
/// The snapshot is taken from the mutating transaction's view of the data,
/// so two concurrent edits each score their own snapshot and the last
/// commit wins.
#[derive(Debug, Clone, Serialize)]
pub struct ScoringSnapshot {
    pub title: String,
    pub description: String,
    pub category: String,
    pub portions: i32,
    pub ingredients: Vec<SnapshotIngredient>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SnapshotIngredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub category: IngredientCategory,
    pub vitamins: Vec<String>,
    pub excesses: Vec<String>,
}

impl ScoringSnapshot {
    pub fn new(recipe: &Recipe, ingredients: Vec<SnapshotIngredient>) -> Self {
        Self {
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            category: recipe.category.clone(),
            portions: recipe.portions,
            ingredients,
        }
    }

    /// Snapshot for a recipe that has no ingredient rows yet (first scoring
    /// at creation time).
    pub fn without_ingredients(recipe: &Recipe) -> Self {
        Self::new(recipe, Vec::new())
    }

    pub fn from_rows(recipe: &Recipe, rows: &[IngredientWithType]) -> Self {
        Self::new(recipe, rows.iter().map(SnapshotIngredient::from_row).collect())
    }

    /// Scoring request sent to the oracle. The reply is free text; the
    /// engine extracts the score from it.
    pub fn prompt(&self) -> String {
        let ingredients: Vec<String> = self
            .ingredients
            .iter()
            .map(|ing| {
                format!(
                    "{{nombre: {}, cantidad: {} {}, categoria: {:?}, vitaminas: {:?}, excesos: {:?}}}",
                    ing.name, ing.quantity, ing.unit, ing.category, ing.vitamins, ing.excesses
                )
            })
            .collect();

        format!(
            "Eres un experto en nutrición. Evalúa la siguiente receta y dame un puntaje \
             nutricional de 1 a 100, donde 100 es extremadamente saludable y 1 es nada saludable.\n\
             \n\
             Receta: {}\n\
             Descripción: {}\n\
             Categoría: {}\n\
             Porciones: {}\n\
             Ingredientes: [{}]\n\
             \n\
             Responde SOLO con un número entre 1 y 100.",
            self.title,
            self.description,
            self.category,
            self.portions,
            ingredients.join(", ")
        )
    }
}

impl SnapshotIngredient {
    pub fn from_row(row: &IngredientWithType) -> Self {
        Self {
            name: row.type_name.clone(),
            quantity: row.ingredient.quantity,
            unit: row.ingredient.unit.clone(),
            category: row.category,
            vitamins: row.vitamins.clone(),
            excesses: row.excesses.clone(),
        }
    }
}
