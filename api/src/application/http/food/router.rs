use super::handlers::{
    compare_foods::{__path_compare_foods, compare_foods},
    lookup_food::{__path_lookup_food, lookup_food},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(lookup_food, compare_foods))]
pub struct FoodApiDoc;

pub fn food_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/food/lookup", state.args.server.root_path),
            post(lookup_food),
        )
        .route(
            &format!("{}/food/compare", state.args.server.root_path),
            post(compare_foods),
        )
}
