use std::sync::Arc;

use anyhow::Context;
use ridgeback_api_rest::RestServerConfig;
use ridgeback_config::Config;
use ridgeback_core_contact_impl::ContactFormServiceImpl;
use ridgeback_core_relay_impl::RelayServiceImpl;
use ridgeback_extern_impl::{
    contact::{ContactApiServiceConfig, ContactApiServiceImpl},
    http::HttpClient,
    webhook::{WebhookApiServiceConfig, WebhookApiServiceImpl},
};
use types::{ContactApi, ContactForm, RestServer, WebhookApi};

pub mod types;

/// Builds the services from the configuration
#[derive(Debug, Clone)]
pub struct Provider {
    http_client: HttpClient,

    // API
    rest_server_config: RestServerConfig,

    // Extern
    webhook_api_service_config: WebhookApiServiceConfig,
    contact_api_service_config: ContactApiServiceConfig,
}

impl Provider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http_client = HttpClient::new(config.webhook.timeout.map(Into::into))
            .context("Failed to build http client")?;

        // API
        let rest_server_config = RestServerConfig {
            host: config.http.host,
            port: config.http.port,
        };

        // Extern
        let webhook_api_service_config =
            WebhookApiServiceConfig::new(config.webhook.url.clone());

        let contact_api_service_config = ContactApiServiceConfig {
            relay_url: Arc::new(config.contact.relay_url.clone()),
        };

        Ok(Self {
            http_client,
            rest_server_config,
            webhook_api_service_config,
            contact_api_service_config,
        })
    }

    pub fn rest_server(&self) -> RestServer {
        RestServer {
            config: self.rest_server_config.clone(),
            relay: RelayServiceImpl {
                webhook_api: self.webhook_api(),
            },
        }
    }

    pub fn contact_form(&self) -> ContactForm {
        ContactFormServiceImpl::new(self.contact_api())
    }

    pub fn webhook_api(&self) -> WebhookApi {
        WebhookApiServiceImpl {
            config: self.webhook_api_service_config.clone(),
            client: self.http_client.clone(),
        }
    }

    pub fn contact_api(&self) -> ContactApi {
        ContactApiServiceImpl {
            config: self.contact_api_service_config.clone(),
            client: self.http_client.clone(),
        }
    }
}
