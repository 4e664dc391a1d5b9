use std::sync::Arc;

use time::OffsetDateTime;
use validator::Validate;

use crate::{ComposedMessage, ContactSettings, ContactSubmission, DeliveryReceipt, Error, Mailer};

#[derive(Clone)]
pub struct Command {
    settings: ContactSettings,
    mailer: Option<Arc<dyn Mailer>>,
}

impl Command {
    /// `mailer` is `None` when the deployment has no provider credentials.
    pub fn new(settings: ContactSettings, mailer: Option<Arc<dyn Mailer>>) -> Self {
        Self { settings, mailer }
    }

    pub fn is_configured(&self) -> bool {
        self.mailer.is_some()
    }

    pub async fn submit_form(&self, input: ContactSubmission) -> crate::Result<DeliveryReceipt> {
        input.validate()?;

        let Some(mailer) = self.mailer.as_ref() else {
            tracing::error!("Email service credentials are missing");
            log_submission(&input, "email service not configured");
            return Err(Error::Configuration);
        };

        let message = ComposedMessage::compose(&self.settings, &input, OffsetDateTime::now_utc())?;

        if let Err(e) = mailer.verify().await {
            tracing::error!(error = %e, "Email provider verification failed");
            log_submission(&input, "verification failed");
            return Err(e.into());
        }

        let receipt = match mailer.send(&message).await {
            Ok(receipt) => receipt,
            Err(e) => {
                tracing::error!(error = %e, to = %message.to, "Failed to send contact message");
                log_submission(&input, "delivery failed");
                return Err(e.into());
            }
        };

        tracing::info!(
            to = %message.to,
            message_id = receipt.message_id.as_deref().unwrap_or("-"),
            "Contact message sent"
        );
        log_submission(&input, "sent");

        Ok(receipt)
    }
}

/// Keeps a copy of the submission in the logs since nothing is stored.
fn log_submission(input: &ContactSubmission, outcome: &str) {
    let timestamp = OffsetDateTime::now_utc().unix_timestamp();

    if outcome == "sent" {
        tracing::info!(
            name = %input.full_name(),
            email = %input.email,
            subject = %input.subject,
            message = %input.message,
            timestamp,
            outcome,
            "Contact form submission"
        );
    } else {
        tracing::warn!(
            name = %input.full_name(),
            email = %input.email,
            subject = %input.subject,
            message = %input.message,
            timestamp,
            outcome,
            "Contact form submission"
        );
    }
}
