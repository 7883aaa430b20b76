use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use drfoodie_core::domain::comparison::{ComparisonFoodInfo, ComparisonList, NutrientMaxima};

/// Which of an entry's values are the top of their column. Ties all count:
/// every entry equal to the column maximum is flagged.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HighlightFlags {
    pub calories: bool,
    pub protein: bool,
    pub carbohydrates: bool,
    pub fat: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonEntryView {
    #[serde(flatten)]
    pub food: ComparisonFoodInfo,
    pub highlights: HighlightFlags,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonViewResponse {
    pub items: Vec<ComparisonEntryView>,
    pub maxima: NutrientMaxima,
}

pub fn comparison_view(list: &ComparisonList) -> ComparisonViewResponse {
    let maxima = list.maxima();
    let items = list
        .entries()
        .iter()
        .map(|entry| {
            let facts = entry.nutrition_facts;
            ComparisonEntryView {
                food: entry.clone(),
                highlights: HighlightFlags {
                    calories: facts.calories == maxima.calories,
                    protein: facts.protein == maxima.protein,
                    carbohydrates: facts.carbohydrates == maxima.carbohydrates,
                    fat: facts.fat == maxima.fat,
                },
            }
        })
        .collect();

    ComparisonViewResponse { items, maxima }
}

#[utoipa::path(
    get,
    path = "",
    tag = "comparison",
    summary = "Get the comparison selection",
    description = "Returns the foods currently selected for comparison with per-nutrient maxima and highlight flags",
    responses(
        (status = 200, body = ComparisonViewResponse)
    )
)]
pub async fn get_comparison(
    State(state): State<AppState>,
) -> Result<Response<ComparisonViewResponse>, ApiError> {
    let session = state.session.read().await;

    Ok(Response::OK(comparison_view(&session.comparison)))
}
