use std::future::Future;

use ridgeback_models::contact::ContactSubmission;
use thiserror::Error;

/// Client for the relay endpoint, used by the contact form.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactApiService: Send + Sync + 'static {
    fn submit(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = Result<(), ContactApiError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactApiError {
    #[error("The relay responded with status {0}.")]
    Status(u16),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactApiService {
    pub fn with_submit(
        mut self,
        submission: ContactSubmission,
        result: Result<(), ContactApiError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
