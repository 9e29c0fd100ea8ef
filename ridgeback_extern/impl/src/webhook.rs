use std::sync::Arc;

use anyhow::Context;
use ridgeback_extern_contracts::webhook::{WebhookApiService, WebhookDeliverError};
use ridgeback_models::relay::RelayPayload;
use tracing::debug;
use url::Url;

use crate::http::HttpClient;

const WEBHOOK_ENDPOINT: &str = "https://ridgeback.app.n8n.cloud/webhook/contact-contractors";

#[derive(Debug, Clone)]
pub struct WebhookApiServiceImpl {
    pub config: WebhookApiServiceConfig,
    pub client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct WebhookApiServiceConfig {
    endpoint: Arc<Url>,
}

impl WebhookApiServiceConfig {
    pub fn new(endpoint_override: Option<Url>) -> Self {
        Self {
            endpoint: endpoint_override
                .unwrap_or_else(|| WEBHOOK_ENDPOINT.parse().unwrap())
                .into(),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl WebhookApiService for WebhookApiServiceImpl {
    async fn deliver(&self, payload: RelayPayload) -> Result<(), WebhookDeliverError> {
        let response = self
            .client
            .post((*self.config.endpoint).clone())
            .json(&payload)
            .send()
            .await
            .context("Failed to send payload to webhook")?;

        let status = response.status();
        debug!(%status, "webhook responded");
        if !status.is_success() {
            return Err(WebhookDeliverError::Status(status.as_u16()));
        }

        Ok(())
    }
}
