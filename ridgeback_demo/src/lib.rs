use std::sync::LazyLock;

use ridgeback_models::{
    contact::{ContactDraft, ContactSubmission},
    relay::RelayPayload,
};
use serde_json::json;

/// A complete draft without a phone number.
pub static JOHN_DRAFT: LazyLock<ContactDraft> = LazyLock::new(|| ContactDraft {
    name: "John".into(),
    email: "j@x.com".into(),
    phone: String::new(),
    message: "Hi".into(),
    phone_touched: false,
});

pub static JOHN: LazyLock<ContactSubmission> = LazyLock::new(|| ContactSubmission {
    name: "John".try_into().unwrap(),
    email: "j@x.com".try_into().unwrap(),
    phone: String::new(),
    message: "Hi".try_into().unwrap(),
});

pub static JOHN_PAYLOAD: LazyLock<RelayPayload> = LazyLock::new(|| {
    json!({
        "name": "John",
        "email": "j@x.com",
        "phone": "",
        "message": "Hi",
    })
    .into()
});

/// A draft with every field filled in, including a touched phone number.
pub static JANE_DRAFT: LazyLock<ContactDraft> = LazyLock::new(|| ContactDraft {
    name: "Jane Carter".into(),
    email: "jane@example.com".into(),
    phone: "813-921-1717".into(),
    message: "We would like a quote for a new roof.".into(),
    phone_touched: true,
});

pub static JANE: LazyLock<ContactSubmission> = LazyLock::new(|| ContactSubmission {
    name: "Jane Carter".try_into().unwrap(),
    email: "jane@example.com".try_into().unwrap(),
    phone: "813-921-1717".into(),
    message: "We would like a quote for a new roof.".try_into().unwrap(),
});

pub const MALFORMED_BODY: &str = "name=John&email=j%40x.com";
