use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use portfolio_contact::{
    Command, ComposedMessage, ContactSettings, ContactSubmission, DeliveryError, DeliveryReceipt,
    Mailer,
};

#[derive(Clone, Copy)]
#[allow(dead_code)]
pub enum Behavior {
    Accept,
    FailVerify,
    Reject,
    NetworkDown,
}

#[derive(Clone)]
pub struct RecordingMailer {
    pub behavior: Behavior,
    pub sent: Arc<Mutex<Vec<ComposedMessage>>>,
    pub verified: Arc<Mutex<u32>>,
}

impl RecordingMailer {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            sent: Arc::default(),
            verified: Arc::default(),
        }
    }

    pub fn sent(&self) -> Vec<ComposedMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn verify(&self) -> Result<(), DeliveryError> {
        *self.verified.lock().unwrap() += 1;

        match self.behavior {
            Behavior::FailVerify => Err(DeliveryError::Authentication("535 bad login".to_owned())),
            _ => Ok(()),
        }
    }

    async fn send(&self, message: &ComposedMessage) -> Result<DeliveryReceipt, DeliveryError> {
        match self.behavior {
            Behavior::Reject => Err(DeliveryError::Rejected {
                status: 422,
                body: "invalid from".to_owned(),
            }),
            Behavior::NetworkDown => Err(DeliveryError::Network("connection refused".to_owned())),
            _ => {
                self.sent.lock().unwrap().push(message.clone());
                Ok(DeliveryReceipt {
                    message_id: Some("msg-1".to_owned()),
                })
            }
        }
    }
}

pub fn settings() -> ContactSettings {
    ContactSettings {
        recipient: "owner@portfolio.localhost".to_owned(),
        from_address: "noreply@portfolio.localhost".to_owned(),
    }
}

pub fn command(mailer: Option<RecordingMailer>) -> Command {
    Command::new(
        settings(),
        mailer.map(|m| Arc::new(m) as Arc<dyn Mailer>),
    )
}

pub fn ann() -> ContactSubmission {
    ContactSubmission {
        first_name: "Ann".to_owned(),
        last_name: "Lee".to_owned(),
        email: "ann@x.com".to_owned(),
        subject: "Hi".to_owned(),
        message: "Hello\nWorld".to_owned(),
    }
}
