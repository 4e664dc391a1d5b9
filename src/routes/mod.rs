use axum::{
    Router,
    routing::{get, post},
};

mod assets;
mod contact;
mod health;
mod index;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub contact_command: portfolio_contact::Command,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(index::page))
        .route("/api/contact", post(contact::action))
        .route("/static/{*path}", get(assets::asset))
        .layer(axum::middleware::from_fn(
            crate::middleware::cache_control_middleware,
        ))
        .with_state(app_state)
}
