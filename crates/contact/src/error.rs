use validator::ValidationErrors;

use crate::DeliveryError;

pub const REQUIRED_MESSAGE: &str = "All fields are required";
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email format";
pub const NOT_CONFIGURED_MESSAGE: &str = "Email service not configured";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("Email service not configured")]
    Configuration,

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn public_message(&self) -> String {
        match self {
            Error::Validation(msg) => msg.to_owned(),
            Error::Configuration => NOT_CONFIGURED_MESSAGE.to_owned(),
            Error::Delivery(e) => e.public_message().to_owned(),
        }
    }

    /// Server-side delivery could not happen; the client should offer its mail app.
    pub fn fallback(&self) -> bool {
        !matches!(self, Error::Validation(_))
    }
}

impl From<ValidationErrors> for Error {
    fn from(value: ValidationErrors) -> Self {
        let missing = value
            .field_errors()
            .values()
            .flat_map(|errors| errors.iter())
            .any(|e| e.code == "required");

        if missing {
            Self::Validation(REQUIRED_MESSAGE.to_owned())
        } else {
            Self::Validation(INVALID_EMAIL_MESSAGE.to_owned())
        }
    }
}
