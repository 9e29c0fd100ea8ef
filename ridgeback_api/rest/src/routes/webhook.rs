use std::{panic::AssertUnwindSafe, sync::Arc};

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use futures::FutureExt;
use ridgeback_core_relay_contracts::{RelayError, RelayService};
use serde::Serialize;

use crate::middlewares::panic_handler::panic_message;

/// The only failure body callers ever see, regardless of the cause.
const RELAY_FAILED: &str = "n8n webhook failed";

pub fn router(service: Arc<impl RelayService>) -> Router<()> {
    Router::new()
        .route("/api/webhook", routing::post(relay))
        .with_state(service)
}

#[derive(Serialize)]
struct RelayResponse {
    success: bool,
}

async fn relay(
    service: State<Arc<impl RelayService>>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!("n8n webhook error: failed to read request body: {err}");
            return failed();
        }
    };

    let result = AssertUnwindSafe(async { service.relay(body.to_vec()).await })
        .catch_unwind()
        .await;

    match result {
        Ok(Ok(())) => Json(RelayResponse { success: true }).into_response(),
        Ok(Err(err)) => relay_failed(err),
        Err(payload) => {
            tracing::error!("n8n webhook error: relay panicked: {}", panic_message(&*payload));
            failed()
        }
    }
}

fn relay_failed(err: RelayError) -> Response {
    match &err {
        RelayError::MalformedPayload(_) => tracing::warn!("n8n webhook error: {err}"),
        RelayError::Rejected(_) | RelayError::Other(_) => {
            tracing::error!("n8n webhook error: {err}")
        }
    }
    failed()
}

fn failed() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, RELAY_FAILED).into_response()
}
