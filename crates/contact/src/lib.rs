//! Contact form relay: validate a submission, compose the notification and
//! hand it to whichever [`Mailer`] the deployment configured.

mod command;
mod error;
mod mailer;
mod message;
mod submission;

pub use command::*;
pub use error::*;
pub use mailer::*;
pub use message::*;
pub use submission::*;
