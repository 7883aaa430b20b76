use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    comparison::entities::ComparisonFoodInfo,
    food_info::{
        entities::FoodInfo,
        ports::{FoodInfoService, LLMClient},
        schema::{get_food_comparison_schema, get_food_info_schema},
        value_objects::{CompareFoodsInput, LookupFoodInput},
    },
};

impl<LLM> FoodInfoService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn lookup_food(&self, input: LookupFoodInput) -> Result<FoodInfo, CoreError> {
        // 1. Request the schema-constrained nutritional analysis
        let prompt = format!(
            "Provide a detailed nutritional analysis for {}. Ensure all data is accurate, science-based, and presented per 100g serving.",
            input.query
        );

        let raw_response = self
            .llm_client
            .generate_with_text(prompt, get_food_info_schema())
            .await
            .map_err(|e| {
                tracing::error!("Food info generation failed: {}", e);
                CoreError::RetrievalFailed
            })?;

        // 2. Parse the payload, ignoring surrounding whitespace
        let mut food: FoodInfo = serde_json::from_str(raw_response.trim()).map_err(|e| {
            tracing::error!("Failed to parse food info response: {}", e);
            CoreError::RetrievalFailed
        })?;

        // 3. Generate an illustrative image from the query the text model
        // produced. This step never fails the lookup: a missing image
        // renders as a placeholder.
        food.image_base64 = match self.llm_client.generate_image(food.image_query.clone()).await {
            Ok(image) => image,
            Err(e) => {
                tracing::warn!("Image generation failed for '{}': {}", food.food_name, e);
                None
            }
        };

        Ok(food)
    }

    async fn compare_foods(
        &self,
        input: CompareFoodsInput,
    ) -> Result<Vec<ComparisonFoodInfo>, CoreError> {
        if input.food_names.len() < 2 {
            return Err(CoreError::InvalidArgument(
                "At least two foods are required for comparison.".to_string(),
            ));
        }

        let prompt = format!(
            "Provide a nutritional comparison for the following foods: {}. Focus on calories, protein, carbs, and fat per 100g serving.",
            input.food_names.join(", ")
        );

        let raw_response = self
            .llm_client
            .generate_with_text(prompt, get_food_comparison_schema())
            .await
            .map_err(|e| {
                tracing::error!("Food comparison generation failed: {}", e);
                CoreError::ComparisonFailed
            })?;

        serde_json::from_str(raw_response.trim()).map_err(|e| {
            tracing::error!("Failed to parse food comparison response: {}", e);
            CoreError::ComparisonFailed
        })
    }
}

#[cfg(test)]
mod tests {
    use std::future::ready;

    use super::*;
    use crate::domain::food_info::ports::MockLLMClient;

    fn avocado_payload() -> String {
        serde_json::json!({
            "foodName": "Avocado",
            "description": "A creamy, nutrient-dense fruit.",
            "imageQuery": "fresh ripe avocado",
            "nutritionFacts": {
                "calories": 160.0,
                "protein": 2.0,
                "carbohydrates": 9.0,
                "fat": 15.0,
                "fiber": 7.0,
                "sugar": 0.7,
                "sodium": 7.0,
                "cholesterol": 0.0
            },
            "vitaminsAndMinerals": [
                { "name": "Potassium", "amount": "485mg", "percentDV": "10%" }
            ],
            "healthBenefits": ["Supports heart health"],
            "overuseWarnings": ["High in calories"]
        })
        .to_string()
    }

    fn comparison_payload() -> String {
        serde_json::json!([
            {
                "foodName": "Kale",
                "imageQuery": "fresh kale leaves",
                "nutritionFacts": { "calories": 49.0, "protein": 4.3, "carbohydrates": 8.8, "fat": 0.9 }
            },
            {
                "foodName": "Spinach",
                "imageQuery": "fresh spinach leaves",
                "nutritionFacts": { "calories": 23.0, "protein": 2.9, "carbohydrates": 3.6, "fat": 0.4 }
            }
        ])
        .to_string()
    }

    #[tokio::test]
    async fn lookup_food_merges_generated_image() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .withf(|prompt, _| prompt.contains("avocado"))
            .times(1)
            .returning(|_, _| Box::pin(ready(Ok(avocado_payload()))));
        llm.expect_generate_image()
            .withf(|prompt| prompt == "fresh ripe avocado")
            .times(1)
            .returning(|_| Box::pin(ready(Ok(Some("aGVsbG8=".to_string())))));

        let service = Service::new(llm);
        let food = service
            .lookup_food(LookupFoodInput {
                query: "avocado".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(food.food_name, "Avocado");
        assert_eq!(food.image_base64.as_deref(), Some("aGVsbG8="));
        assert_eq!(food.nutrition_facts.calories, 160.0);
        assert!(food.healthier_alternatives.is_empty());
    }

    #[tokio::test]
    async fn lookup_food_tolerates_surrounding_whitespace() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .returning(|_, _| Box::pin(ready(Ok(format!("\n  {}  \n", avocado_payload())))));
        llm.expect_generate_image()
            .returning(|_| Box::pin(ready(Ok(None))));

        let service = Service::new(llm);
        let food = service
            .lookup_food(LookupFoodInput {
                query: "avocado".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(food.food_name, "Avocado");
    }

    #[tokio::test]
    async fn lookup_food_degrades_to_no_image_on_image_failure() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .returning(|_, _| Box::pin(ready(Ok(avocado_payload()))));
        llm.expect_generate_image().times(1).returning(|_| {
            Box::pin(ready(Err(CoreError::ExternalServiceError(
                "image backend down".to_string(),
            ))))
        });

        let service = Service::new(llm);
        let food = service
            .lookup_food(LookupFoodInput {
                query: "avocado".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(food.food_name, "Avocado");
        assert_eq!(food.image_base64, None);
    }

    #[tokio::test]
    async fn lookup_food_skips_image_step_when_retrieval_fails() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().times(1).returning(|_, _| {
            Box::pin(ready(Err(CoreError::ExternalServiceError(
                "text backend down".to_string(),
            ))))
        });
        llm.expect_generate_image().times(0);

        let service = Service::new(llm);
        let err = service
            .lookup_food(LookupFoodInput {
                query: "avocado".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::RetrievalFailed);
    }

    #[tokio::test]
    async fn lookup_food_fails_on_unparsable_payload() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .returning(|_, _| Box::pin(ready(Ok("not json at all".to_string()))));
        llm.expect_generate_image().times(0);

        let service = Service::new(llm);
        let err = service
            .lookup_food(LookupFoodInput {
                query: "avocado".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::RetrievalFailed);
    }

    #[tokio::test]
    async fn compare_foods_requires_at_least_two_names() {
        for food_names in [vec![], vec!["kale".to_string()]] {
            let mut llm = MockLLMClient::new();
            llm.expect_generate_with_text().times(0);

            let service = Service::new(llm);
            let err = service
                .compare_foods(CompareFoodsInput { food_names })
                .await
                .unwrap_err();

            assert_eq!(
                err,
                CoreError::InvalidArgument(
                    "At least two foods are required for comparison.".to_string()
                )
            );
        }
    }

    #[tokio::test]
    async fn compare_foods_returns_restricted_entries() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .withf(|prompt, _| prompt.contains("kale, spinach"))
            .times(1)
            .returning(|_, _| Box::pin(ready(Ok(comparison_payload()))));

        let service = Service::new(llm);
        let foods = service
            .compare_foods(CompareFoodsInput {
                food_names: vec!["kale".to_string(), "spinach".to_string()],
            })
            .await
            .unwrap();

        assert_eq!(foods.len(), 2);
        assert_eq!(foods[0].food_name, "Kale");
        assert_eq!(foods[1].nutrition_facts.calories, 23.0);
        assert_eq!(foods[0].image_base64, None);
    }

    #[tokio::test]
    async fn compare_foods_fails_on_unparsable_payload() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .returning(|_, _| Box::pin(ready(Ok("{\"not\": \"an array\"}".to_string()))));

        let service = Service::new(llm);
        let err = service
            .compare_foods(CompareFoodsInput {
                food_names: vec!["kale".to_string(), "spinach".to_string()],
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::ComparisonFailed);
    }
}
