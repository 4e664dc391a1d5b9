use async_trait::async_trait;

use crate::ComposedMessage;

/// Provider acknowledgment for an accepted message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub message_id: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("provider rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("invalid message: {0}")]
    Message(String),
}

impl DeliveryError {
    /// Message safe to show to the person who submitted the form.
    pub fn public_message(&self) -> &'static str {
        match self {
            DeliveryError::Authentication(_) => {
                "Email authentication failed. Please check the email service credentials."
            }
            DeliveryError::Network(_) => "Network error. Please try again.",
            DeliveryError::Rejected { .. } | DeliveryError::Message(_) => {
                "Failed to send message"
            }
        }
    }
}

/// Delivers a composed message through some transactional channel.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Checks the provider accepts our credentials before sending.
    async fn verify(&self) -> Result<(), DeliveryError> {
        Ok(())
    }

    async fn send(&self, message: &ComposedMessage) -> Result<DeliveryReceipt, DeliveryError>;
}
