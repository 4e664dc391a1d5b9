//! Transactional email over an HTTP API (Resend-compatible `POST /emails`).

use async_trait::async_trait;
use portfolio_contact::{ComposedMessage, DeliveryError, DeliveryReceipt, Mailer};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::EmailConfig;

#[derive(Clone)]
pub struct HttpApiMailer {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: Option<String>,
}

impl HttpApiMailer {
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        Ok(Self {
            http_client: reqwest::Client::builder().build()?,
            base_url: config.api_base_url.trim_end_matches('/').to_owned(),
            api_key: config.api_key.to_owned(),
        })
    }
}

#[async_trait]
impl Mailer for HttpApiMailer {
    async fn send(&self, message: &ComposedMessage) -> Result<DeliveryReceipt, DeliveryError> {
        let url = format!("{}/emails", self.base_url);
        let request = SendEmailRequest {
            from: &message.from,
            to: [&message.to],
            reply_to: &message.reply_to,
            subject: &message.subject,
            html: &message.html,
            text: &message.text,
        };

        tracing::info!(to = %message.to, subject = %message.subject, "Sending email");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DeliveryError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    DeliveryError::Authentication(body)
                }
                _ => DeliveryError::Rejected {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        // Accepted is accepted, even when the body has no id we understand.
        let message_id = response
            .json::<SendEmailResponse>()
            .await
            .ok()
            .and_then(|body| body.id);

        Ok(DeliveryReceipt { message_id })
    }
}
