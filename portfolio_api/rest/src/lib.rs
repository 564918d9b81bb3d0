use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use portfolio_core_content_contracts::ContentService;
use portfolio_utils::Apply;
use tokio::net::TcpListener;
use tracing::info;

mod errors;
mod middlewares;
mod models;
mod routes;

/// Read-only JSON API over the content of the site.
#[derive(Debug, Clone)]
pub struct RestServer<Content> {
    content: Content,
    config: RestServerConfig,
}

#[derive(Debug, Clone, Default)]
pub struct RestServerConfig {
    /// Origins allowed to call the API from a browser. `*` allows any origin.
    pub allowed_origins: Vec<String>,
}

impl<Content> RestServer<Content>
where
    Content: ContentService,
{
    pub fn new(content: Content, config: RestServerConfig) -> Self {
        Self { content, config }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let listener = TcpListener::bind((host, port))
            .await
            .with_context(|| format!("Failed to bind to {host}:{port}"))?;
        self.serve_on(listener).await
    }

    pub async fn serve_on(self, listener: TcpListener) -> anyhow::Result<()> {
        let router = self.router()?;
        info!("Listening on http://{}", listener.local_addr()?);
        axum::serve(listener, router)
            .await
            .context("Failed to start HTTP server")
    }

    fn router(self) -> anyhow::Result<Router<()>> {
        let cors = middlewares::cors::layer(&self.config.allowed_origins)?;
        let content = Arc::new(self.content);

        let router = Router::new()
            .merge(routes::health::router())
            .merge(routes::pages::router(Arc::clone(&content)))
            .merge(routes::projects::router(Arc::clone(&content)))
            .merge(routes::blog::router(content))
            .apply_map(cors, |router, cors| router.layer(cors));

        Ok(middlewares::trace::add(router))
    }
}
