use axum::{Json, extract::State};

use crate::application::http::{
    comparison::handlers::get_comparison::{ComparisonViewResponse, comparison_view},
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use drfoodie_core::domain::{food_info::entities::FoodInfo, session::SessionEvent};

#[utoipa::path(
    post,
    path = "",
    tag = "comparison",
    summary = "Add a food to the comparison selection",
    description = "Projects a previously looked-up food into the comparison selection. Adding a name already present (case-insensitively) is a no-op.",
    request_body = FoodInfo,
    responses(
        (status = 201, body = ComparisonViewResponse, description = "Food was appended"),
        (status = 200, body = ComparisonViewResponse, description = "Duplicate name, selection unchanged")
    )
)]
pub async fn add_to_comparison(
    State(state): State<AppState>,
    Json(food): Json<FoodInfo>,
) -> Result<Response<ComparisonViewResponse>, ApiError> {
    let mut session = state.session.write().await;
    let len_before = session.comparison.len();

    *session = std::mem::take(&mut *session).apply(SessionEvent::AddedToComparison(food));

    let view = comparison_view(&session.comparison);
    if session.comparison.len() > len_before {
        Ok(Response::Created(view))
    } else {
        Ok(Response::OK(view))
    }
}
