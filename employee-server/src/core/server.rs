//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::future::Future;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::api::build_router;
use crate::core::{Config, Result, ServerError, ServerState};

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Bind, serve and stop on Ctrl-C / SIGTERM
    pub async fn run(&self) -> Result<()> {
        let listener = self.bind().await?;
        self.serve(listener, shutdown_signal()).await
    }

    pub async fn bind(&self) -> Result<TcpListener> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        TcpListener::bind(addr).await.map_err(ServerError::Bind)
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests
    ///
    /// After the signal the listener stops accepting. In-flight requests get
    /// at most `shutdown_timeout` to finish; whatever is still running after
    /// that is abandoned.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr().map_err(ServerError::Bind)?;
        tracing::info!("🚀 Employee API listening on http://{}", addr);
        tracing::info!("🔍 Health check: http://{}/health", addr);

        crate::api::health::mark_started();
        let app = build_router(self.state.clone());
        let token = CancellationToken::new();
        let graceful = token.clone();

        let mut server = tokio::spawn(async move {
            axum::serve(listener, app.into_make_service())
                .with_graceful_shutdown(async move { graceful.cancelled().await })
                .await
        });

        tokio::select! {
            joined = &mut server => {
                // Server stopped without a shutdown signal
                return flatten(joined);
            }
            _ = shutdown => {
                tracing::info!("Shutting down...");
            }
        }

        token.cancel();
        let grace = self.config.shutdown_timeout();
        match tokio::time::timeout(grace, &mut server).await {
            Ok(joined) => {
                flatten(joined)?;
                tracing::info!("Server stopped cleanly");
            }
            Err(_) => {
                server.abort();
                tracing::warn!(
                    grace_ms = grace.as_millis() as u64,
                    "Grace period elapsed, abandoning in-flight requests"
                );
            }
        }
        Ok(())
    }
}

fn flatten(
    joined: std::result::Result<std::io::Result<()>, tokio::task::JoinError>,
) -> Result<()> {
    match joined {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(ServerError::Internal(e.into())),
        Err(e) => Err(ServerError::Internal(anyhow::anyhow!("server task failed: {e}"))),
    }
}

/// Resolves on Ctrl-C, or SIGTERM on unix
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
