use axum::extract::{Path, State};

use crate::application::http::{
    comparison::handlers::get_comparison::{ComparisonViewResponse, comparison_view},
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use drfoodie_core::domain::session::SessionEvent;

#[utoipa::path(
    delete,
    path = "/{food_name}",
    tag = "comparison",
    summary = "Remove a food from the comparison selection",
    description = "Removes the entry whose name exactly equals the path segment; unknown names are a no-op",
    params(
        ("food_name" = String, Path, description = "Exact food name as stored in the selection"),
    ),
    responses(
        (status = 200, body = ComparisonViewResponse)
    )
)]
pub async fn remove_from_comparison(
    Path(food_name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<ComparisonViewResponse>, ApiError> {
    let mut session = state.session.write().await;

    *session = std::mem::take(&mut *session).apply(SessionEvent::RemovedFromComparison(food_name));

    Ok(Response::OK(comparison_view(&session.comparison)))
}
