use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use portfolio_contact::ContactSettings;
use portfolio_notification::EmailConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    /// Site owner address; receives notifications and backs the mailto fallback.
    #[serde(default = "default_recipient")]
    pub recipient: String,
    #[serde(default = "default_success_message")]
    pub success_message: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: default_recipient(),
            success_message: default_success_message(),
        }
    }
}

fn default_recipient() -> String {
    "owner@portfolio.localhost".to_string()
}

fn default_success_message() -> String {
    "Message sent successfully".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy variables (EMAIL_USER, EMAIL_PASS, RESEND_API_KEY)
    /// 2. Environment variables (PORTFOLIO__EMAIL__API_KEY, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PORTFOLIO")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(user) = env::var("EMAIL_USER") {
            builder = builder.set_override("email.smtp_username", user)?;
        }
        if let Ok(pass) = env::var("EMAIL_PASS") {
            builder = builder.set_override("email.smtp_password", pass)?;
        }
        if let Ok(api_key) = env::var("RESEND_API_KEY") {
            builder = builder.set_override("email.api_key", api_key)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.contact.recipient.trim().is_empty() {
            return Err("Contact recipient must be set".to_string());
        }
        Ok(())
    }

    pub fn contact_settings(&self) -> ContactSettings {
        ContactSettings {
            recipient: self.contact.recipient.to_owned(),
            from_address: self.email.sender(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            email: EmailConfig::default(),
            contact: ContactConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = config();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_recipient() {
        let mut config = config();
        config.contact.recipient = " ".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_contact_settings() {
        let mut config = config();
        config.contact.recipient = "me@example.com".to_string();

        let settings = config.contact_settings();
        assert_eq!(settings.recipient, "me@example.com");
        assert_eq!(settings.from_address, config.email.sender());
    }

    #[test]
    fn test_smtp_login_sends_as_itself() {
        let mut config = config();
        config.email.smtp_username = "me@gmail.com".to_string();
        config.email.smtp_password = "app-password".to_string();

        assert_eq!(config.contact_settings().from_address, "me@gmail.com");
    }
}
