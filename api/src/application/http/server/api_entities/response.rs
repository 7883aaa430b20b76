use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

/// Success envelope used by all handlers.
pub enum Response<T>
where
    T: Serialize,
{
    OK(T),
    Created(T),
}

impl<T> IntoResponse for Response<T>
where
    T: Serialize,
{
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::OK(body) => (StatusCode::OK, Json(body)).into_response(),
            Response::Created(body) => (StatusCode::CREATED, Json(body)).into_response(),
        }
    }
}
