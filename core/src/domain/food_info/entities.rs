use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Macro- and micronutrient amounts per 100g serving. Units are implicit by
/// field name: calories in kcal, protein through sugar in grams, sodium and
/// cholesterol in milligrams. No unit conversion is performed anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NutritionFacts {
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,
    pub cholesterol: f64,
}

/// Vitamin or mineral entry. Amounts and daily-value percentages are
/// free-form strings (e.g. "15mg", "25%") displayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VitaminMineral {
    pub name: String,
    pub amount: String,
    #[serde(rename = "percentDV")]
    pub percent_dv: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthierAlternative {
    pub name: String,
    pub reason: String,
}

/// Full nutritional profile of a single food, as produced by one lookup.
/// `image_base64` stays empty until image generation completes; absence is
/// not an error and renders as a placeholder downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodInfo {
    pub food_name: String,
    pub description: String,
    pub image_query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
    pub nutrition_facts: NutritionFacts,
    pub vitamins_and_minerals: Vec<VitaminMineral>,
    pub health_benefits: Vec<String>,
    pub overuse_warnings: Vec<String>,
    #[serde(default)]
    pub healthier_alternatives: Vec<HealthierAlternative>,
}
