use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request body: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Contact(#[from] portfolio_contact::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    fallback: bool,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error, fallback) = match self {
            AppError::BadRequest(e) => {
                tracing::warn!("Rejected contact payload: {e}");
                (StatusCode::BAD_REQUEST, "Invalid request body".to_string(), false)
            }
            AppError::Contact(portfolio_contact::Error::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, msg, false)
            }
            AppError::Contact(e) => {
                tracing::error!("Contact delivery unavailable: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, e.public_message(), e.fallback())
            }
        };

        (status_code, Json(ErrorBody { error, fallback })).into_response()
    }
}
