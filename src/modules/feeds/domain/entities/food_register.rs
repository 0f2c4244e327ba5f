use serde::Serialize;

/// One entry of the external food-register feed, reduced to the fields the
/// application shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRegister {
    pub id: i64,
    pub ingredients: Vec<FoodRegisterIngredient>,
    pub nutrition_summary: Option<serde_json::Value>,
    pub image_url: Option<String>,
    pub total_calories: Option<f64>,
    pub total_protein: Option<f64>,
    pub total_carbs: Option<f64>,
    pub total_fat: Option<f64>,
    pub total_fiber: Option<f64>,
    pub total_sugar: Option<f64>,
    pub total_sodium: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRegisterIngredient {
    pub name: String,
    pub category: Option<String>,
}
