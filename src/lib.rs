pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod template;

pub use config::Config;
pub use routes::AppState;

/// Build the application router from configuration.
///
/// The mailer is picked from the email credentials; without any, the
/// contact endpoint answers with a fallback hint.
pub fn create_app(config: Config) -> anyhow::Result<axum::Router> {
    let mailer = portfolio_notification::mailer_from_config(&config.email)?;
    let contact_command = portfolio_contact::Command::new(config.contact_settings(), mailer);

    Ok(routes::router(AppState {
        config,
        contact_command,
    }))
}
