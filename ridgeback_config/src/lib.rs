use std::{net::IpAddr, path::Path};

use anyhow::Context;
use config::{Environment, File, FileFormat};
pub use duration::Duration;
use serde::Deserialize;
use url::Url;

mod duration;

pub const DEFAULT_CONFIG: &str = include_str!("../../config.toml");
pub const CONFIG_PATHS_ENV: &str = "RIDGEBACK_CONFIG";
pub const ENV_PREFIX: &str = "RIDGEBACK";

/// Load the bundled defaults, then every file listed in `RIDGEBACK_CONFIG` (separated by `:`),
/// then `RIDGEBACK__SECTION__KEY` environment variables.
pub fn load() -> anyhow::Result<Config> {
    let paths = std::env::var(CONFIG_PATHS_ENV).unwrap_or_default();
    let paths = paths
        .split(':')
        .filter(|path| !path.is_empty())
        .map(Path::new)
        .collect::<Vec<_>>();
    load_with_override(&paths, &[])
}

/// Same as [`load`], but with explicit paths and additional TOML snippets that take precedence
/// over everything else.
pub fn load_with_override(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<Config> {
    let builder = config::Config::builder()
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    let builder = paths.iter().try_fold(builder, |builder, path| {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        anyhow::Ok(builder.add_source(File::from_str(&content, FileFormat::Toml)))
    })?;

    let builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__"),
    );

    overrides
        .iter()
        .fold(builder, |builder, snippet| {
            builder.add_source(File::from_str(snippet, FileFormat::Toml))
        })
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    #[serde(default)]
    pub webhook: WebhookConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Default, Deserialize)]
pub struct WebhookConfig {
    pub url: Option<Url>,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub relay_url: Url,
}
