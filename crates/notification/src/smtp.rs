//! SMTP relay delivery using lettre

use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, MultiPart},
    transport::smtp::{self, authentication::Credentials},
};
use portfolio_contact::{ComposedMessage, DeliveryError, DeliveryReceipt, Mailer};

use crate::EmailConfig;

#[derive(Clone)]
pub struct SmtpMailer {
    mailer: SmtpTransport,
}

impl SmtpMailer {
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let creds = Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

        // Port 587 speaks plain SMTP upgraded with STARTTLS, everything else implicit TLS.
        let builder = if !config.smtp_tls {
            tracing::warn!(
                smtp_host = %config.smtp_host,
                "SMTP TLS disabled, credentials travel in plaintext (local relays only)"
            );
            SmtpTransport::builder_dangerous(&config.smtp_host)
        } else if config.smtp_port == 587 {
            SmtpTransport::starttls_relay(&config.smtp_host)?
        } else {
            SmtpTransport::relay(&config.smtp_host)?
        };

        let mailer = builder
            .port(config.smtp_port)
            .credentials(creds)
            .build();

        Ok(Self { mailer })
    }
}

pub(crate) fn build_message(message: &ComposedMessage) -> Result<Message, DeliveryError> {
    let from: Mailbox = parse_mailbox(&message.from)?;
    let to: Mailbox = parse_mailbox(&message.to)?;
    let reply_to: Mailbox = parse_mailbox(&message.reply_to)?;

    Message::builder()
        .from(from)
        .to(to)
        .reply_to(reply_to)
        .message_id(None)
        .subject(message.subject.to_owned())
        .multipart(MultiPart::alternative_plain_html(
            message.text.to_owned(),
            message.html.to_owned(),
        ))
        .map_err(|e| DeliveryError::Message(e.to_string()))
}

fn parse_mailbox(value: &str) -> Result<Mailbox, DeliveryError> {
    value
        .parse()
        .map_err(|e| DeliveryError::Message(format!("{value}: {e}")))
}

fn classify(err: smtp::Error) -> DeliveryError {
    match err.status().map(|code| code.to_string()) {
        Some(code) if matches!(code.as_str(), "530" | "534" | "535") => {
            DeliveryError::Authentication(err.to_string())
        }
        Some(code) => DeliveryError::Rejected {
            status: code.parse().unwrap_or_default(),
            body: err.to_string(),
        },
        None => DeliveryError::Network(err.to_string()),
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn verify(&self) -> Result<(), DeliveryError> {
        let mailer = self.mailer.clone();

        let connected = tokio::task::spawn_blocking(move || mailer.test_connection())
            .await
            .map_err(|e| DeliveryError::Network(e.to_string()))?
            .map_err(classify)?;

        if !connected {
            return Err(DeliveryError::Authentication(
                "SMTP server refused the connection test".to_owned(),
            ));
        }

        Ok(())
    }

    async fn send(&self, message: &ComposedMessage) -> Result<DeliveryReceipt, DeliveryError> {
        let email = build_message(message)?;
        let message_id = email
            .headers()
            .get_raw("Message-ID")
            .map(|id| id.trim().to_owned());
        let mailer = self.mailer.clone();

        tracing::info!(to = %message.to, subject = %message.subject, "Sending email");

        tokio::task::spawn_blocking(move || mailer.send(&email))
            .await
            .map_err(|e| DeliveryError::Network(e.to_string()))?
            .map_err(classify)?;

        Ok(DeliveryReceipt { message_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composed() -> ComposedMessage {
        ComposedMessage {
            from: "Portfolio <noreply@portfolio.localhost>".to_owned(),
            to: "owner@portfolio.localhost".to_owned(),
            reply_to: "ann@x.com".to_owned(),
            subject: "Portfolio Contact: Hi".to_owned(),
            html: "<p>Hello<br>World</p>".to_owned(),
            text: "Hello\nWorld".to_owned(),
        }
    }

    #[test]
    fn test_build_message_headers() {
        let email = build_message(&composed()).unwrap();
        let raw = String::from_utf8(email.formatted()).unwrap();

        assert!(raw.contains("Reply-To: ann@x.com"));
        assert!(raw.contains("To: owner@portfolio.localhost"));
        assert!(raw.contains("Subject: Portfolio Contact: Hi"));
        assert!(raw.contains("multipart/alternative"));
        assert!(email.headers().get_raw("Message-ID").is_some());
    }

    #[test]
    fn test_build_message_rejects_bad_address() {
        let mut message = composed();
        message.reply_to = "not an address".to_owned();

        assert!(matches!(
            build_message(&message),
            Err(DeliveryError::Message(_))
        ));
    }
}
