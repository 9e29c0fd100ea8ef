use std::future::Future;

use ridgeback_models::relay::RelayPayload;
use thiserror::Error;

/// Client for the external automation webhook that receives contact submissions.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait WebhookApiService: Send + Sync + 'static {
    /// Deliver the payload to the webhook in a single attempt.
    fn deliver(
        &self,
        payload: RelayPayload,
    ) -> impl Future<Output = Result<(), WebhookDeliverError>> + Send;
}

#[derive(Debug, Error)]
pub enum WebhookDeliverError {
    #[error("The webhook responded with status {0}.")]
    Status(u16),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockWebhookApiService {
    pub fn with_deliver(
        mut self,
        payload: RelayPayload,
        result: Result<(), WebhookDeliverError>,
    ) -> Self {
        self.expect_deliver()
            .once()
            .with(mockall::predicate::eq(payload))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
