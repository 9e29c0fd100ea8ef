use serde::Serialize;

#[derive(Serialize)]
pub struct ApiError {
    pub detail: &'static str,
}
