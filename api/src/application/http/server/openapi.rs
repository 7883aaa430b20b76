use crate::application::http::{
    comparison::router::ComparisonApiDoc,
    food::router::FoodApiDoc,
    health::{__path_health, health},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dr Foodie API"
    ),
    paths(health),
    nest(
        (path = "/food", api = FoodApiDoc),
        (path = "/comparison", api = ComparisonApiDoc),
    )
)]
pub struct ApiDoc;
