use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::macros::nutype_required_text;

/// Number of digits a complete phone number consists of.
pub const PHONE_DIGITS: usize = 10;

// ASCII only, so formatting agrees with `phone_digits`.
static NON_DIGIT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9]").unwrap());
static PHONE_PARTS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{0,3})([0-9]{0,3})([0-9]{0,4})$").unwrap());

/// A validated contact form submission, as it is transmitted to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: ContactEmail,
    pub phone: String,
    pub message: ContactMessage,
}

nutype_required_text!(
    /// Full name of the person reaching out
    ContactName
);

nutype_required_text!(
    /// Email address to answer to. Only presence is checked, the browser validates the format.
    ContactEmail
);

nutype_required_text!(
    /// Free text describing the request
    ContactMessage
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

/// The in-progress submission held by the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    /// Set once the phone field has been edited, enables phone validation.
    pub phone_touched: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactDraftAction {
    Update { field: ContactField, value: String },
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    #[error("missing required fields")]
    MissingRequiredFields,
    #[error("invalid phone")]
    InvalidPhone,
}

impl ContactValidationError {
    /// The message shown to the user next to the form.
    pub fn user_message(self) -> &'static str {
        match self {
            Self::MissingRequiredFields => "Please fill in name, email, and message.",
            Self::InvalidPhone => "Please enter a valid 10-digit phone number.",
        }
    }
}

impl ContactDraft {
    pub fn reduce(self, action: ContactDraftAction) -> Self {
        match action {
            ContactDraftAction::Update { field, value } => match field {
                ContactField::Name => Self { name: value, ..self },
                ContactField::Email => Self {
                    email: value,
                    ..self
                },
                ContactField::Phone => Self {
                    phone: format_phone(&value),
                    phone_touched: true,
                    ..self
                },
                ContactField::Message => Self {
                    message: value,
                    ..self
                },
            },
            ContactDraftAction::Reset => Self::default(),
        }
    }

    /// Whether the inline "Enter a 10-digit number" hint should be shown.
    pub fn phone_invalid(&self) -> bool {
        self.phone_touched && !self.phone.is_empty() && phone_digits(&self.phone) != PHONE_DIGITS
    }

    /// Checks required fields first, then the phone number.
    pub fn validate(&self) -> Result<ContactSubmission, ContactValidationError> {
        let (Ok(name), Ok(email), Ok(message)) = (
            ContactName::try_new(self.name.clone()),
            ContactEmail::try_new(self.email.clone()),
            ContactMessage::try_new(self.message.clone()),
        ) else {
            return Err(ContactValidationError::MissingRequiredFields);
        };

        if self.phone_invalid() {
            return Err(ContactValidationError::InvalidPhone);
        }

        Ok(ContactSubmission {
            name,
            email,
            phone: self.phone.clone(),
            message,
        })
    }
}

/// Counts the digits in `value`, ignoring any formatting.
pub fn phone_digits(value: &str) -> usize {
    value.chars().filter(char::is_ascii_digit).count()
}

/// Formats the digits of `value` as `DDD-DDD-DDDD`.
///
/// Incomplete numbers are formatted as far as they go (`555-12`). Input with more than
/// [`PHONE_DIGITS`] digits does not fit the pattern and is returned unchanged.
pub fn format_phone(value: &str) -> String {
    let cleaned = NON_DIGIT_REGEX.replace_all(value, "");
    let Some(parts) = PHONE_PARTS_REGEX.captures(&cleaned) else {
        return value.into();
    };

    let mut out = String::with_capacity(12);
    for part in parts.iter().skip(1).flatten().map(|m| m.as_str()) {
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('-');
        }
        out.push_str(part);
    }
    out
}
