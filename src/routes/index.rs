use axum::{extract::State, response::IntoResponse};

use crate::{routes::AppState, template::render};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub contact_address: String,
    pub year: i32,
}

/// GET / - portfolio page with the contact form
pub async fn page(State(app_state): State<AppState>) -> impl IntoResponse {
    render(IndexTemplate {
        contact_address: app_state.config.contact.recipient.to_owned(),
        year: time::OffsetDateTime::now_utc().year(),
    })
}
