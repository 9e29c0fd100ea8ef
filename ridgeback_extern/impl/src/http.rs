use std::{ops::Deref, sync::LazyLock, time::Duration};

use ridgeback_utils::ridgeback_version;

pub static USER_AGENT: LazyLock<String> = LazyLock::new(|| {
    let homepage = env!("CARGO_PKG_HOMEPAGE");
    let repository = env!("CARGO_PKG_REPOSITORY");
    let version = ridgeback_version();

    format!("Ridgeback Backend ({homepage}, {repository}, Version {version})")
});

const _: () = {
    assert!(!env!("CARGO_PKG_HOMEPAGE").is_empty());
    assert!(!env!("CARGO_PKG_REPOSITORY").is_empty());
};

#[derive(Debug, Clone)]
pub struct HttpClient(reqwest::Client);

impl HttpClient {
    /// Without a `timeout` the transport defaults apply.
    pub fn new(timeout: Option<Duration>) -> reqwest::Result<Self> {
        let builder = reqwest::Client::builder().user_agent(&*USER_AGENT);
        let builder = match timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        builder.build().map(Self)
    }
}

impl Deref for HttpClient {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
