use std::net::IpAddr;

use anyhow::Context;
use axum::Router;
use ridgeback_core_relay_contracts::RelayService;
use tokio::net::TcpListener;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Relay> {
    pub config: RestServerConfig,
    pub relay: Relay,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl<Relay> RestServer<Relay>
where
    Relay: RelayService,
{
    pub async fn serve(self) -> anyhow::Result<()> {
        let RestServerConfig { host, port } = self.config;
        let listener = TcpListener::bind((host, port))
            .await
            .with_context(|| format!("Failed to bind to {host}:{port}"))?;
        axum::serve(listener, self.router())
            .await
            .context("Failed to start HTTP server")
    }

    pub fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router())
            .merge(routes::webhook::router(self.relay.into()));

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}
