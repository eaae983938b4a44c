use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub mod auth;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotImplemented(_) => (StatusCode::NOT_IMPLEMENTED, "Not implemented"),
        };

        let body = Json(json!({
            "error": error_message,
            "details": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
