use std::{
    mem,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use ridgeback_core_contact_contracts::{
    ContactFormService, ContactFormState, ContactFormStatus, ContactFormSubmitError,
};
use ridgeback_extern_contracts::contact::ContactApiService;
use ridgeback_models::contact::{ContactDraftAction, ContactField};
use tracing::{info, warn};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
pub struct ContactFormServiceImpl<ContactApi> {
    contact_api: ContactApi,
    state: Arc<Mutex<ContactFormState>>,
}

impl<ContactApi> ContactFormServiceImpl<ContactApi> {
    pub fn new(contact_api: ContactApi) -> Self {
        Self {
            contact_api,
            state: Default::default(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ContactFormState> {
        lock(&self.state)
    }

    fn dispatch(state: &mut ContactFormState, action: ContactDraftAction) {
        state.draft = mem::take(&mut state.draft).reduce(action);
    }
}

impl<ContactApi> ContactFormService for ContactFormServiceImpl<ContactApi>
where
    ContactApi: ContactApiService,
{
    fn update_field(&self, field: ContactField, value: String) {
        Self::dispatch(
            &mut self.lock(),
            ContactDraftAction::Update { field, value },
        );
    }

    fn state(&self) -> ContactFormState {
        self.lock().clone()
    }

    async fn submit(&self) -> Result<(), ContactFormSubmitError> {
        let submission = {
            let mut state = self.lock();
            if state.submitting() {
                return Err(ContactFormSubmitError::Busy);
            }

            match state.draft.validate() {
                Ok(submission) => {
                    state.status = ContactFormStatus::Submitting;
                    submission
                }
                Err(err) => {
                    state.status = ContactFormStatus::ValidationFailed(err);
                    return Err(err.into());
                }
            }
        };

        let in_flight = InFlight(&self.state);
        let result = self.contact_api.submit(submission).await;

        let mut state = self.lock();
        let outcome = match result {
            Ok(()) => {
                info!("contact form submitted");
                Self::dispatch(&mut state, ContactDraftAction::Reset);
                state.status = ContactFormStatus::Submitted;
                Ok(())
            }
            Err(err) => {
                warn!("Failed to submit contact form: {err}");
                state.status = ContactFormStatus::SubmitFailed(err.to_string());
                Err(ContactFormSubmitError::Transmission(err))
            }
        };
        drop(state);
        drop(in_flight);
        outcome
    }
}

fn lock(state: &Mutex<ContactFormState>) -> MutexGuard<'_, ContactFormState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Returns the form to `Idle` when a submission is dropped before the relay answered.
struct InFlight<'a>(&'a Mutex<ContactFormState>);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut state = lock(self.0);
        if state.submitting() {
            warn!("contact form submission abandoned");
            state.status = ContactFormStatus::Idle;
        }
    }
}
