//! Tag each request with an ID, reusing the one set by an upstream proxy if it is well formed

use std::{fmt, str::FromStr};

use axum::{
    extract::Request,
    middleware::{from_fn, Next},
    response::{IntoResponse, Response},
    Router,
};
use base64::{display::Base64Display, engine::general_purpose::STANDARD_NO_PAD, Engine};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(from_fn(middleware))
}

async fn middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
        .unwrap_or_else(RequestId::new);
    request.extensions_mut().insert(request_id);

    let response = next.run(request).await;
    ([(REQUEST_ID_HEADER, request_id.to_string())], response).into_response()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub Uuid);

impl RequestId {
    fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Base64Display::new(self.0.as_bytes(), &STANDARD_NO_PAD))
    }
}

impl FromStr for RequestId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = STANDARD_NO_PAD.decode(s).map_err(|_| ())?;
        Uuid::from_slice(&bytes).map(Self).map_err(|_| ())
    }
}
