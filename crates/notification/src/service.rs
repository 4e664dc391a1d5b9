//! Picks the delivery channel for contact notifications from configuration.

use std::sync::Arc;

use portfolio_contact::Mailer;
use serde::Deserialize;

use crate::{HttpApiMailer, SmtpMailer};

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    /// Off only for local plaintext relays (MailDev, test servers).
    #[serde(default = "default_smtp_tls")]
    pub smtp_tls: bool,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Sender override; see [`EmailConfig::sender`].
    #[serde(default)]
    pub from_address: Option<String>,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            smtp_tls: default_smtp_tls(),
            api_key: String::new(),
            api_base_url: default_api_base_url(),
            from_address: None,
        }
    }
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    465
}

fn default_smtp_tls() -> bool {
    true
}

fn default_api_base_url() -> String {
    "https://api.resend.com".to_string()
}

/// Sender the HTTP API accepts without a verified domain.
pub const DEFAULT_API_SENDER: &str = "Portfolio <onboarding@resend.dev>";

impl EmailConfig {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub fn has_smtp_credentials(&self) -> bool {
        !self.smtp_username.is_empty() && !self.smtp_password.is_empty()
    }

    /// The `From` address for notifications.
    ///
    /// An explicit `from_address` always wins. Otherwise SMTP relays send as
    /// the logged-in account, and the HTTP API uses its onboarding sender.
    pub fn sender(&self) -> String {
        match self.from_address.as_deref().map(str::trim) {
            Some(from) if !from.is_empty() => from.to_owned(),
            _ if !self.has_api_key() && self.has_smtp_credentials() => {
                self.smtp_username.to_owned()
            }
            _ => DEFAULT_API_SENDER.to_owned(),
        }
    }
}

/// Builds the configured mailer, or `None` when no credentials are set.
///
/// An API key wins over an SMTP login when both are present.
pub fn mailer_from_config(config: &EmailConfig) -> anyhow::Result<Option<Arc<dyn Mailer>>> {
    if config.has_api_key() {
        tracing::info!(
            api_base_url = %config.api_base_url,
            from = %config.sender(),
            "Email delivery through HTTP API"
        );

        return Ok(Some(Arc::new(HttpApiMailer::new(config)?)));
    }

    if config.has_smtp_credentials() {
        tracing::info!(
            smtp_host = %config.smtp_host,
            smtp_port = config.smtp_port,
            from = %config.sender(),
            "Email delivery through SMTP relay"
        );

        return Ok(Some(Arc::new(SmtpMailer::new(config)?)));
    }

    tracing::warn!("No email credentials configured, contact form will ask for fallback");

    Ok(None)
}
