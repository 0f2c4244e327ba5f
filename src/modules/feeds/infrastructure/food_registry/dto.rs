use serde::Deserialize;

use crate::modules::feeds::domain::{FoodRegister, FoodRegisterIngredient};

#[derive(Debug, Clone, Deserialize)]
pub struct FoodRegistersResponse {
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub results: Vec<FoodRegisterDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FoodRegisterDto {
    pub id: i64,
    #[serde(default)]
    pub food_items: Vec<FoodItemDto>,
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

#[derive(Debug, Clone, Deserialize)]
pub struct FoodItemDto {
    pub name: Option<String>,
    pub category: Option<String>,
}

impl FoodRegisterDto {
    /// Keep name and category of each food item; items without a name carry
    /// no information and are dropped.
    pub fn into_entity(self) -> FoodRegister {
        let ingredients = self
            .food_items
            .into_iter()
            .filter_map(|item| {
                item.name.map(|name| FoodRegisterIngredient {
                    name,
                    category: item.category,
                })
            })
            .collect();

        FoodRegister {
            id: self.id,
            ingredients,
            nutrition_summary: self.nutrition_summary,
            image_url: self.image_url,
            total_calories: self.total_calories,
            total_protein: self.total_protein,
            total_carbs: self.total_carbs,
            total_fat: self.total_fat,
            total_fiber: self.total_fiber,
            total_sugar: self.total_sugar,
            total_sodium: self.total_sodium,
        }
    }
}
