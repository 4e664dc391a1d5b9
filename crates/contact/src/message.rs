use askama::Template;
use time::{OffsetDateTime, format_description::well_known::Rfc2822};

use crate::{ContactSubmission, DeliveryError};

pub const SUBJECT_PREFIX: &str = "Portfolio Contact: ";

/// Where contact notifications go and who they come from.
#[derive(Debug, Clone)]
pub struct ContactSettings {
    pub recipient: String,
    pub from_address: String,
}

/// A notification ready to be handed to a [`crate::Mailer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedMessage {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactHtmlTemplate<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    lines: Vec<&'a str>,
    sent_at: &'a str,
}

#[derive(Template)]
#[template(path = "contact.txt")]
struct ContactPlainTemplate<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
    sent_at: &'a str,
}

impl ComposedMessage {
    pub fn compose(
        settings: &ContactSettings,
        input: &ContactSubmission,
        sent_at: OffsetDateTime,
    ) -> Result<Self, DeliveryError> {
        let name = input.full_name();
        let sent_at = sent_at
            .format(&Rfc2822)
            .map_err(|e| DeliveryError::Message(e.to_string()))?;

        let html = ContactHtmlTemplate {
            name: &name,
            email: &input.email,
            subject: &input.subject,
            lines: message_lines(&input.message),
            sent_at: &sent_at,
        }
        .render()
        .map_err(|e| DeliveryError::Message(e.to_string()))?;

        let text = ContactPlainTemplate {
            name: &name,
            email: &input.email,
            subject: &input.subject,
            message: &input.message,
            sent_at: &sent_at,
        }
        .render()
        .map_err(|e| DeliveryError::Message(e.to_string()))?;

        Ok(Self {
            from: settings.from_address.to_owned(),
            to: settings.recipient.to_owned(),
            reply_to: input.email.to_owned(),
            subject: format!("{SUBJECT_PREFIX}{}", input.subject),
            html,
            text,
        })
    }
}

/// Splits on `\r\n`, `\r` or `\n`.
fn message_lines(message: &str) -> Vec<&str> {
    message
        .split("\r\n")
        .flat_map(|line| line.split(['\r', '\n']))
        .collect()
}
