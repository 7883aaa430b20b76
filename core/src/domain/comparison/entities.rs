use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::food_info::entities::FoodInfo;

/// The four scalar nutrients tracked in a comparison column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nutrient {
    Calories,
    Protein,
    Carbohydrates,
    Fat,
}

impl Nutrient {
    pub const ALL: [Nutrient; 4] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbohydrates,
        Nutrient::Fat,
    ];
}

/// Restricted nutrition facts kept for side-by-side comparison, per 100g
/// serving.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonNutritionFacts {
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
}

impl ComparisonNutritionFacts {
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbohydrates => self.carbohydrates,
            Nutrient::Fat => self.fat,
        }
    }
}

/// Projection of a [`FoodInfo`] holding just what the comparison table
/// renders. Independent of the source food once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonFoodInfo {
    pub food_name: String,
    pub image_query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
    pub nutrition_facts: ComparisonNutritionFacts,
}

impl From<&FoodInfo> for ComparisonFoodInfo {
    fn from(food: &FoodInfo) -> Self {
        Self {
            food_name: food.food_name.clone(),
            image_query: food.image_query.clone(),
            image_base64: food.image_base64.clone(),
            nutrition_facts: ComparisonNutritionFacts {
                calories: food.nutrition_facts.calories,
                protein: food.nutrition_facts.protein,
                carbohydrates: food.nutrition_facts.carbohydrates,
                fat: food.nutrition_facts.fat,
            },
        }
    }
}

/// Per-nutrient maximum across a comparison list, used to highlight the top
/// value in each rendered column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NutrientMaxima {
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
}
