use std::future::Future;

use ridgeback_extern_contracts::contact::ContactApiError;
use ridgeback_models::contact::{ContactDraft, ContactField, ContactValidationError};
use thiserror::Error;

/// The contact form: holds the draft, validates it and submits it to the relay.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormService: Send + Sync + 'static {
    /// Replace the value of `field` in the draft. Phone numbers are formatted on the way in.
    fn update_field(&self, field: ContactField, value: String);

    /// Snapshot of the current draft and submission status.
    fn state(&self) -> ContactFormState;

    /// Validate the draft and transmit it.
    ///
    /// The draft is reset on success and kept otherwise. While a submission is in flight, any
    /// further call fails with [`ContactFormSubmitError::Busy`].
    fn submit(&self) -> impl Future<Output = Result<(), ContactFormSubmitError>> + Send;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub draft: ContactDraft,
    pub status: ContactFormStatus,
}

/// Where the form is in its submission lifecycle.
///
/// Validation happens synchronously inside [`ContactFormService::submit`], so it has no status of
/// its own. The outcome statuses stay until the next submission starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContactFormStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
    ValidationFailed(ContactValidationError),
    SubmitFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFormFeedback {
    Success(&'static str),
    Error(&'static str),
}

impl ContactFormState {
    pub fn submitting(&self) -> bool {
        self.status == ContactFormStatus::Submitting
    }

    /// The message to show below the form, if any.
    pub fn feedback(&self) -> Option<ContactFormFeedback> {
        match &self.status {
            ContactFormStatus::Idle | ContactFormStatus::Submitting => None,
            ContactFormStatus::Submitted => Some(ContactFormFeedback::Success(
                "Thanks! Your message has been sent.",
            )),
            ContactFormStatus::ValidationFailed(err) => {
                Some(ContactFormFeedback::Error(err.user_message()))
            }
            ContactFormStatus::SubmitFailed(_) => Some(ContactFormFeedback::Error(
                "Failed to submit. Please try again.",
            )),
        }
    }
}

impl ContactFormFeedback {
    pub fn message(self) -> &'static str {
        match self {
            Self::Success(message) | Self::Error(message) => message,
        }
    }
}

#[derive(Debug, Error)]
pub enum ContactFormSubmitError {
    #[error("A submission is already in flight.")]
    Busy,
    #[error(transparent)]
    Validation(#[from] ContactValidationError),
    #[error("Failed to transmit the submission: {0}")]
    Transmission(#[source] ContactApiError),
}
