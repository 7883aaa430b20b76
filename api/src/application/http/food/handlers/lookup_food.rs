use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    food::validators::LookupFoodRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use drfoodie_core::domain::{
    food_info::{entities::FoodInfo, ports::FoodInfoService, value_objects::LookupFoodInput},
    session::SessionEvent,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LookupFoodResponse {
    pub data: FoodInfo,
}

#[utoipa::path(
    post,
    path = "/lookup",
    tag = "food",
    summary = "Look up nutritional information for a food",
    description = "Generates a schema-constrained nutritional analysis plus an illustrative image for one free-text food query",
    request_body = LookupFoodRequest,
    responses(
        (status = 200, body = LookupFoodResponse)
    )
)]
pub async fn lookup_food(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LookupFoodRequest>,
) -> Result<Response<LookupFoodResponse>, ApiError> {
    {
        let mut session = state.session.write().await;
        *session = std::mem::take(&mut *session).apply(SessionEvent::SearchStarted);
    }

    let result = state
        .service
        .lookup_food(LookupFoodInput {
            query: payload.query,
        })
        .await;

    match result {
        Ok(food) => {
            let mut session = state.session.write().await;
            *session =
                std::mem::take(&mut *session).apply(SessionEvent::SearchSucceeded(food.clone()));

            Ok(Response::OK(LookupFoodResponse { data: food }))
        }
        Err(err) => {
            let mut session = state.session.write().await;
            *session =
                std::mem::take(&mut *session).apply(SessionEvent::SearchFailed(err.to_string()));

            Err(ApiError::from(err))
        }
    }
}
