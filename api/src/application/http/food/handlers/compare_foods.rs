use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    food::validators::CompareFoodsRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use drfoodie_core::domain::{
    comparison::entities::ComparisonFoodInfo,
    food_info::{ports::FoodInfoService, value_objects::CompareFoodsInput},
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CompareFoodsResponse {
    pub data: Vec<ComparisonFoodInfo>,
}

#[utoipa::path(
    post,
    path = "/compare",
    tag = "food",
    summary = "Fetch a nutritional comparison for several foods",
    description = "Generates restricted nutrition facts for two or more foods in one request",
    request_body = CompareFoodsRequest,
    responses(
        (status = 200, body = CompareFoodsResponse),
        (status = 400, description = "Fewer than two food names given")
    )
)]
pub async fn compare_foods(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CompareFoodsRequest>,
) -> Result<Response<CompareFoodsResponse>, ApiError> {
    let foods = state
        .service
        .compare_foods(CompareFoodsInput {
            food_names: payload.food_names,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CompareFoodsResponse { data: foods }))
}
