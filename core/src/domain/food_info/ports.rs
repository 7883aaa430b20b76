use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    comparison::entities::ComparisonFoodInfo,
    food_info::{
        entities::FoodInfo,
        value_objects::{CompareFoodsInput, LookupFoodInput},
    },
};

/// Client trait for calling the generative AI backend.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Request a JSON payload constrained to `response_schema` from the
    /// text model.
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Request an illustrative image from the image model. Returns the
    /// base64 payload, or `None` when the response carries no usable
    /// inline image. Transport failures are `Err`; callers decide whether
    /// that is fatal.
    fn generate_image(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;
}

/// Service trait for the food lookup and comparison flows.
#[cfg_attr(test, mockall::automock)]
pub trait FoodInfoService: Send + Sync {
    fn lookup_food(
        &self,
        input: LookupFoodInput,
    ) -> impl Future<Output = Result<FoodInfo, CoreError>> + Send;

    fn compare_foods(
        &self,
        input: CompareFoodsInput,
    ) -> impl Future<Output = Result<Vec<ComparisonFoodInfo>, CoreError>> + Send;
}
