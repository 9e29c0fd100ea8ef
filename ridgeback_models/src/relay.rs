use serde::Serialize;

/// An arbitrary JSON document received by the relay endpoint.
///
/// The shape is not checked, any valid JSON value is forwarded as is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RelayPayload(pub serde_json::Value);

impl RelayPayload {
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body).map(Self)
    }
}

impl From<serde_json::Value> for RelayPayload {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}
