//! Listener lifecycle for the backend service.

use std::future::Future;

use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::router::build_router;

pub struct DevkitServer {
    config: ServerConfig,
}

impl DevkitServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Router with this server's body limit, CORS origins and engine guards.
    pub fn router(&self) -> axum::Router {
        build_router(&self.config)
    }

    /// Serve until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        self.serve_until(ctrl_c()).await
    }

    /// Serve until `shutdown` resolves. In-flight comparisons finish first.
    pub async fn serve_until<F>(self, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        let addr = listener.local_addr()?;
        tracing::info!(%addr, "devkit server listening");
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;
        tracing::info!("devkit server stopped");
        Ok(())
    }
}

async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("cannot listen for Ctrl-C, serving until killed: {}", e);
        std::future::pending::<()>().await;
    }
}
