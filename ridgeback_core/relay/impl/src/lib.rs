use ridgeback_core_relay_contracts::{RelayError, RelayService};
use ridgeback_extern_contracts::webhook::{WebhookApiService, WebhookDeliverError};
use ridgeback_models::relay::RelayPayload;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct RelayServiceImpl<WebhookApi> {
    pub webhook_api: WebhookApi,
}

impl<WebhookApi> RelayService for RelayServiceImpl<WebhookApi>
where
    WebhookApi: WebhookApiService,
{
    async fn relay(&self, body: Vec<u8>) -> Result<(), RelayError> {
        let payload = RelayPayload::from_slice(&body).map_err(RelayError::MalformedPayload)?;

        self.webhook_api
            .deliver(payload)
            .await
            .map_err(|err| match err {
                WebhookDeliverError::Status(status) => RelayError::Rejected(status),
                WebhookDeliverError::Other(err) => RelayError::Other(err),
            })?;

        debug!("relayed contact submission");
        Ok(())
    }
}
