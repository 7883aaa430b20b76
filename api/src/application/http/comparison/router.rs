use super::handlers::{
    add_to_comparison::{__path_add_to_comparison, add_to_comparison},
    clear_comparison::{__path_clear_comparison, clear_comparison},
    get_comparison::{__path_get_comparison, get_comparison},
    remove_from_comparison::{__path_remove_from_comparison, remove_from_comparison},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_comparison,
    add_to_comparison,
    remove_from_comparison,
    clear_comparison
))]
pub struct ComparisonApiDoc;

pub fn comparison_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/comparison", state.args.server.root_path),
            get(get_comparison)
                .post(add_to_comparison)
                .delete(clear_comparison),
        )
        .route(
            &format!(
                "{}/comparison/{{food_name}}",
                state.args.server.root_path
            ),
            delete(remove_from_comparison),
        )
}
