pub mod nutrition_engine;
pub mod review_aggregator;

pub use nutrition_engine::NutritionEngine;
