use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::Mutex};
use tracing::info;
use url::Url;

pub const WEBHOOK_ROUTE: &str = "/webhook/contact-contractors";

pub async fn start_server(
    host: IpAddr,
    port: u16,
    fail_with: Option<StatusCode>,
) -> anyhow::Result<()> {
    info!("Starting webhook testing server on {host}:{port}");
    info!("Webhook endpoint: http://{host}:{port}{WEBHOOK_ROUTE}");
    if let Some(status) = fail_with {
        info!("Every delivery will be answered with {status}");
    }

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router(WebhookState::new(fail_with).into()))
        .await
        .context("Failed to start HTTP server")
}

/// A webhook testing server running in the background of the current runtime.
#[derive(Debug)]
pub struct TestWebhook {
    pub url: Url,
    state: Arc<WebhookState>,
}

impl TestWebhook {
    /// Bind to an ephemeral port on localhost and serve until the runtime shuts down.
    pub async fn spawn(fail_with: Option<StatusCode>) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(("127.0.0.1", 0))
            .await
            .context("Failed to bind to an ephemeral port")?;
        let addr = listener.local_addr()?;
        let url = format!("http://{addr}{WEBHOOK_ROUTE}").parse()?;

        let state = Arc::new(WebhookState::new(fail_with));
        let router = router(Arc::clone(&state));
        tokio::spawn(async move { axum::serve(listener, router).await });

        Ok(Self { url, state })
    }

    /// The payloads received so far, in order of arrival.
    pub async fn received(&self) -> Vec<Value> {
        self.state.received.lock().await.clone()
    }
}

#[derive(Debug)]
struct WebhookState {
    fail_with: Option<StatusCode>,
    received: Mutex<Vec<Value>>,
}

impl WebhookState {
    fn new(fail_with: Option<StatusCode>) -> Self {
        Self {
            fail_with,
            received: Default::default(),
        }
    }
}

fn router(state: Arc<WebhookState>) -> Router<()> {
    Router::new()
        .route(WEBHOOK_ROUTE, routing::post(deliver))
        .with_state(state)
}

async fn deliver(state: State<Arc<WebhookState>>, Json(payload): Json<Value>) -> Response {
    info!(%payload, "received delivery");
    state.received.lock().await.push(payload);

    match state.fail_with {
        Some(status) => (status, "Workflow could not be started").into_response(),
        None => Json(json!({"message": "Workflow was started"})).into_response(),
    }
}
