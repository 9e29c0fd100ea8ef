use ridgeback_core_contact_impl::ContactFormServiceImpl;
use ridgeback_core_relay_impl::RelayServiceImpl;
use ridgeback_extern_impl::{contact::ContactApiServiceImpl, webhook::WebhookApiServiceImpl};

// API
pub type RestServer = ridgeback_api_rest::RestServer<Relay>;

// Extern
pub type WebhookApi = WebhookApiServiceImpl;
pub type ContactApi = ContactApiServiceImpl;

// Core
pub type Relay = RelayServiceImpl<WebhookApi>;
pub type ContactForm = ContactFormServiceImpl<ContactApi>;
