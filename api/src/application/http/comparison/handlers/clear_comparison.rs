use axum::extract::State;

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
    path = "",
    tag = "comparison",
    summary = "Clear the comparison selection",
    responses(
        (status = 200, body = ComparisonViewResponse)
    )
)]
pub async fn clear_comparison(
    State(state): State<AppState>,
) -> Result<Response<ComparisonViewResponse>, ApiError> {
    let mut session = state.session.write().await;

    *session = std::mem::take(&mut *session).apply(SessionEvent::ComparisonCleared);

    Ok(Response::OK(comparison_view(&session.comparison)))
}
