use std::future::Future;

use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait RelayService: Send + Sync + 'static {
    /// Forward the raw request `body` to the automation webhook.
    ///
    /// The body must be valid JSON but is otherwise passed on untouched.
    fn relay(&self, body: Vec<u8>) -> impl Future<Output = Result<(), RelayError>> + Send;
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("The request body is not valid JSON: {0}")]
    MalformedPayload(#[source] serde_json::Error),
    #[error("The webhook rejected the payload with status {0}.")]
    Rejected(u16),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockRelayService {
    pub fn with_relay(mut self, body: Vec<u8>, result: Result<(), RelayError>) -> Self {
        self.expect_relay()
            .once()
            .with(mockall::predicate::eq(body))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
