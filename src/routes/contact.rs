use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use portfolio_contact::ContactSubmission;
use serde::Serialize;

use crate::{error::AppError, routes::AppState};

#[derive(Serialize)]
pub struct SuccessBody {
    pub message: String,
    pub success: bool,
}

/// POST /api/contact
#[tracing::instrument(skip_all)]
pub async fn action(
    State(app_state): State<AppState>,
    input: Result<Json<ContactSubmission>, JsonRejection>,
) -> Response {
    let Json(input) = match input {
        Ok(input) => input,
        Err(rejection) => return AppError::BadRequest(rejection.body_text()).into_response(),
    };

    tracing::info!(subject = %input.subject, "Contact form received");

    if let Err(e) = app_state.contact_command.submit_form(input).await {
        return AppError::from(e).into_response();
    }

    (
        StatusCode::OK,
        Json(SuccessBody {
            message: app_state.config.contact.success_message.to_owned(),
            success: true,
        }),
    )
        .into_response()
}
