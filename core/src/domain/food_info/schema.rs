use serde_json::json;

/// Returns the JSON schema for full food-info LLM responses.
pub fn get_food_info_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "foodName": {
                "type": "string",
                "description": "The common name of the food item."
            },
            "description": {
                "type": "string",
                "description": "A brief, one-paragraph description of the food."
            },
            "imageQuery": {
                "type": "string",
                "description": "A simple, effective search query for a realistic, high-quality photo of this food. For example: 'fresh ripe avocado'."
            },
            "nutritionFacts": {
                "type": "object",
                "description": "Nutritional information per 100g serving.",
                "properties": {
                    "calories": { "type": "number" },
                    "protein": { "type": "number", "description": "in grams" },
                    "carbohydrates": { "type": "number", "description": "in grams" },
                    "fat": { "type": "number", "description": "in grams" },
                    "fiber": { "type": "number", "description": "in grams" },
                    "sugar": { "type": "number", "description": "in grams" },
                    "sodium": { "type": "number", "description": "in milligrams" },
                    "cholesterol": { "type": "number", "description": "in milligrams" }
                },
                "required": [
                    "calories", "protein", "carbohydrates", "fat",
                    "fiber", "sugar", "sodium", "cholesterol"
                ]
            },
            "vitaminsAndMinerals": {
                "type": "array",
                "description": "List of key vitamins and minerals with their approximate amount per 100g serving.",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "amount": { "type": "string", "description": "e.g., '15mg', '400mcg'" },
                        "percentDV": { "type": "string", "description": "Percentage of Daily Value, e.g., '25%'" }
                    },
                    "required": ["name", "amount", "percentDV"]
                }
            },
            "healthBenefits": {
                "type": "array",
                "description": "A list of 3-5 science-based health benefits.",
                "items": { "type": "string" }
            },
            "overuseWarnings": {
                "type": "array",
                "description": "A list of 1-3 potential health risks or warnings associated with overconsumption. If none, return an empty array.",
                "items": { "type": "string" }
            },
            "healthierAlternatives": {
                "type": "array",
                "description": "A list of 2-3 healthier alternatives with a brief reason. If none are obvious, return an empty array.",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "reason": { "type": "string" }
                    },
                    "required": ["name", "reason"]
                }
            }
        },
        "required": [
            "foodName", "description", "imageQuery", "nutritionFacts",
            "vitaminsAndMinerals", "healthBenefits", "overuseWarnings"
        ]
    })
}

/// Returns the JSON schema for the restricted comparison responses.
pub fn get_food_comparison_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "description": "An array of nutritional information for the requested foods.",
        "items": {
            "type": "object",
            "properties": {
                "foodName": { "type": "string" },
                "imageQuery": {
                    "type": "string",
                    "description": "A simple, effective search query for a realistic, high-quality photo of this food."
                },
                "nutritionFacts": {
                    "type": "object",
                    "description": "Nutritional information per 100g serving.",
                    "properties": {
                        "calories": { "type": "number" },
                        "protein": { "type": "number", "description": "in grams" },
                        "carbohydrates": { "type": "number", "description": "in grams" },
                        "fat": { "type": "number", "description": "in grams" }
                    },
                    "required": ["calories", "protein", "carbohydrates", "fat"]
                }
            },
            "required": ["foodName", "imageQuery", "nutritionFacts"]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn food_info_schema_requires_core_fields() {
        let schema = get_food_info_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();

        for field in [
            "foodName",
            "description",
            "imageQuery",
            "nutritionFacts",
            "vitaminsAndMinerals",
            "healthBenefits",
            "overuseWarnings",
        ] {
            assert!(required.contains(&field), "missing required field {field}");
        }
        // Alternatives are optional in the response shape
        assert!(!required.contains(&"healthierAlternatives"));
    }

    #[test]
    fn comparison_schema_restricts_nutrition_facts() {
        let schema = get_food_comparison_schema();
        let facts = &schema["items"]["properties"]["nutritionFacts"];
        let fields = facts["properties"].as_object().unwrap();
        assert_eq!(fields.len(), 4);
        for field in ["calories", "protein", "carbohydrates", "fat"] {
            assert!(fields.contains_key(field));
        }
    }
}
