use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// One contact-form payload.
///
/// Absent JSON fields deserialize to empty strings so they are reported by
/// validation instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSubmission {
    #[validate(custom(function = "required"))]
    pub first_name: String,
    #[validate(custom(function = "required"))]
    pub last_name: String,
    #[validate(
        custom(function = "required"),
        email,
        regex(path = *EMAIL_REGEX, code = "email")
    )]
    pub email: String,
    #[validate(custom(function = "required"))]
    pub subject: String,
    #[validate(custom(function = "required"))]
    pub message: String,
}

impl ContactSubmission {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// True when any of the five fields is blank.
    pub fn has_blank_field(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.subject,
            &self.message,
        ]
        .iter()
        .any(|value| value.trim().is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }

    Ok(())
}
