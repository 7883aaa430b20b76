use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct LookupFoodRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "query must be between 1 and 200 characters"
    ))]
    pub query: String,
}

/// Minimum list length is checked by the core flow, not here, so the
/// error message matches the lookup contract.
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompareFoodsRequest {
    pub food_names: Vec<String>,
}
