use std::time::Duration;

use portfolio_contact::ContactSubmission;
use tokio::sync::watch;

use crate::{Endpoint, Opener, Reply, mailto_link};

pub const RESET_DELAY: Duration = Duration::from_secs(3);
pub const FALLBACK_DELAY: Duration = Duration::from_millis(1500);
pub const NETWORK_FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";
pub const INCOMPLETE_MESSAGE: &str = "Please fill in all fields";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Incomplete,
    Sent { message: String },
    Failed { error: String },
    FallbackOpened { error: String, link: String },
}

/// Contact form state machine.
///
/// `submit` borrows the form mutably, so a second submission cannot start
/// while one is in flight.
pub struct ContactForm<E, O> {
    endpoint: E,
    opener: O,
    recipient: String,
    pub fields: ContactSubmission,
    state: watch::Sender<FormState>,
    error: Option<String>,
    reset_delay: Duration,
    fallback_delay: Duration,
}

impl<E: Endpoint, O: Opener> ContactForm<E, O> {
    pub fn new(endpoint: E, opener: O, recipient: impl Into<String>) -> Self {
        Self {
            endpoint,
            opener,
            recipient: recipient.into(),
            fields: ContactSubmission::default(),
            state: watch::Sender::new(FormState::Idle),
            error: None,
            reset_delay: RESET_DELAY,
            fallback_delay: FALLBACK_DELAY,
        }
    }

    pub fn with_delays(mut self, reset_delay: Duration, fallback_delay: Duration) -> Self {
        self.reset_delay = reset_delay;
        self.fallback_delay = fallback_delay;
        self
    }

    pub fn state(&self) -> FormState {
        *self.state.borrow()
    }

    pub fn watch(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    /// Last error shown to the user, cleared on the next submit.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        self.error = None;

        if self.fields.has_blank_field() {
            self.error = Some(INCOMPLETE_MESSAGE.to_owned());
            return SubmitOutcome::Incomplete;
        }

        self.state.send_replace(FormState::Submitting);

        let reply = self.endpoint.post(&self.fields).await;

        match reply {
            Ok(Reply::Accepted { message }) => {
                self.state.send_replace(FormState::Submitted);
                tracing::info!("Contact message sent");

                tokio::time::sleep(self.reset_delay).await;
                self.fields.clear();
                self.state.send_replace(FormState::Idle);

                SubmitOutcome::Sent { message }
            }
            Ok(Reply::Failed { error, fallback }) => {
                self.error = Some(error.to_owned());
                self.state.send_replace(FormState::Idle);

                if !fallback {
                    return SubmitOutcome::Failed { error };
                }

                tokio::time::sleep(self.fallback_delay).await;

                match self.open_fallback() {
                    Ok(link) => SubmitOutcome::FallbackOpened { error, link },
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to open mail client");
                        SubmitOutcome::Failed { error }
                    }
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Contact endpoint unreachable");
                self.error = Some(NETWORK_FAILURE_MESSAGE.to_owned());
                self.state.send_replace(FormState::Idle);

                SubmitOutcome::Failed {
                    error: NETWORK_FAILURE_MESSAGE.to_owned(),
                }
            }
        }
    }

    /// Hands a pre-filled `mailto:` link for the current fields to the opener.
    pub fn open_fallback(&self) -> anyhow::Result<String> {
        let link = mailto_link(&self.recipient, &self.fields);
        self.opener.open(&link)?;

        Ok(link)
    }
}
