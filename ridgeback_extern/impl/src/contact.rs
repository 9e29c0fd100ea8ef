use std::sync::Arc;

use anyhow::Context;
use ridgeback_extern_contracts::contact::{ContactApiError, ContactApiService};
use ridgeback_models::contact::ContactSubmission;
use url::Url;

use crate::http::HttpClient;

#[derive(Debug, Clone)]
pub struct ContactApiServiceImpl {
    pub config: ContactApiServiceConfig,
    pub client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct ContactApiServiceConfig {
    pub relay_url: Arc<Url>,
}

impl ContactApiService for ContactApiServiceImpl {
    async fn submit(&self, submission: ContactSubmission) -> Result<(), ContactApiError> {
        let response = self
            .client
            .post((*self.config.relay_url).clone())
            .json(&submission)
            .send()
            .await
            .context("Failed to send contact submission")?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContactApiError::Status(status.as_u16()));
        }

        Ok(())
    }
}
