use std::path::Path;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use http_body_util::BodyExt;
use ridgeback::environment::Provider;
use ridgeback_config::Config;
use ridgeback_core_contact_contracts::{
    ContactFormFeedback, ContactFormService, ContactFormStatus, ContactFormSubmitError,
};
use ridgeback_demo::{JOHN_PAYLOAD, MALFORMED_BODY};
use ridgeback_models::contact::{ContactDraft, ContactField, ContactValidationError};
use ridgeback_testing::webhook::TestWebhook;
use ridgeback_utils::assert_matches;
use serde_json::json;
use tokio::net::TcpListener;
use tower::ServiceExt;
use url::Url;

const NO_PATHS: &[&Path] = &[];

#[tokio::test]
async fn submitted_and_delivered() {
    let webhook = TestWebhook::spawn(None).await.unwrap();
    let relay_url = spawn_relay(&webhook.url).await;
    let form = Provider::new(&config(&webhook.url, &relay_url))
        .unwrap()
        .contact_form();

    form.update_field(ContactField::Name, "John".into());
    form.update_field(ContactField::Email, "j@x.com".into());
    form.update_field(ContactField::Message, "Hi".into());
    form.submit().await.unwrap();

    let state = form.state();
    assert_eq!(state.draft, ContactDraft::default());
    assert_eq!(
        state.feedback(),
        Some(ContactFormFeedback::Success(
            "Thanks! Your message has been sent."
        ))
    );
    assert_eq!(webhook.received().await, [JOHN_PAYLOAD.0.clone()]);
}

#[tokio::test]
async fn formatted_phone_is_delivered() {
    let webhook = TestWebhook::spawn(None).await.unwrap();
    let relay_url = spawn_relay(&webhook.url).await;
    let form = Provider::new(&config(&webhook.url, &relay_url))
        .unwrap()
        .contact_form();

    form.update_field(ContactField::Name, "Jane Carter".into());
    form.update_field(ContactField::Email, "jane@example.com".into());
    form.update_field(ContactField::Phone, "(813) 921 1717".into());
    form.update_field(ContactField::Message, "Quote please".into());
    form.submit().await.unwrap();

    assert_eq!(
        webhook.received().await,
        [json!({
            "name": "Jane Carter",
            "email": "jane@example.com",
            "phone": "813-921-1717",
            "message": "Quote please",
        })]
    );
}

#[tokio::test]
async fn validation_failure_never_reaches_the_relay() {
    let webhook = TestWebhook::spawn(None).await.unwrap();
    let relay_url = spawn_relay(&webhook.url).await;
    let form = Provider::new(&config(&webhook.url, &relay_url))
        .unwrap()
        .contact_form();

    form.update_field(ContactField::Email, "j@x.com".into());
    form.update_field(ContactField::Message, "Hi".into());
    let draft = form.state().draft;

    let result = form.submit().await;

    assert_matches!(
        result,
        Err(ContactFormSubmitError::Validation(
            ContactValidationError::MissingRequiredFields
        ))
    );
    assert_eq!(form.state().draft, draft);
    assert!(webhook.received().await.is_empty());
}

#[tokio::test]
async fn webhook_failure_keeps_the_draft() {
    let webhook = TestWebhook::spawn(Some(StatusCode::SERVICE_UNAVAILABLE))
        .await
        .unwrap();
    let relay_url = spawn_relay(&webhook.url).await;
    let form = Provider::new(&config(&webhook.url, &relay_url))
        .unwrap()
        .contact_form();

    form.update_field(ContactField::Name, "John".into());
    form.update_field(ContactField::Email, "j@x.com".into());
    form.update_field(ContactField::Message, "Hi".into());
    let draft = form.state().draft;

    let result = form.submit().await;

    assert_matches!(result, Err(ContactFormSubmitError::Transmission(_)));
    let state = form.state();
    assert_eq!(state.draft, draft);
    assert_matches!(&state.status, ContactFormStatus::SubmitFailed(_));
    assert_eq!(
        state.feedback(),
        Some(ContactFormFeedback::Error(
            "Failed to submit. Please try again."
        ))
    );
}

#[tokio::test]
async fn relay_rejects_malformed_body() {
    let webhook = TestWebhook::spawn(None).await.unwrap();
    let router = Provider::new(&config(&webhook.url, &webhook.url))
        .unwrap()
        .rest_server()
        .router();

    let response = router
        .oneshot(
            Request::post("/api/webhook")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(MALFORMED_BODY))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"n8n webhook failed");
    assert!(webhook.received().await.is_empty());
}

#[tokio::test]
async fn relay_reports_webhook_failure() {
    let webhook = TestWebhook::spawn(Some(StatusCode::SERVICE_UNAVAILABLE))
        .await
        .unwrap();
    let router = Provider::new(&config(&webhook.url, &webhook.url))
        .unwrap()
        .rest_server()
        .router();

    let response = router
        .oneshot(
            Request::post("/api/webhook")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&*JOHN_PAYLOAD).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"n8n webhook failed");
    assert_eq!(webhook.received().await.len(), 1);
}

fn config(webhook_url: &Url, relay_url: &Url) -> Config {
    let overrides = format!(
        "webhook.url = \"{webhook_url}\"\ncontact.relay_url = \"{relay_url}\"\nhttp.port = 0"
    );
    ridgeback_config::load_with_override(NO_PATHS, &[&overrides]).unwrap()
}

/// Serve the relay on an ephemeral port, forwarding to `webhook_url`.
async fn spawn_relay(webhook_url: &Url) -> Url {
    let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = Provider::new(&config(webhook_url, webhook_url))
        .unwrap()
        .rest_server()
        .router();
    tokio::spawn(async move { axum::serve(listener, router).await });
    format!("http://{addr}/api/webhook").parse().unwrap()
}
