//! HTTP plumbing shared by the lender and portal services.

mod connection;
pub mod health;
pub mod logging;
pub mod shutdown;

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;

use connection::ConnectionCounter;
use shutdown::ShutdownManager;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid bind address '{addr}': {reason}")]
    InvalidAddress { addr: String, reason: String },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// A bound listener waiting for a router.
///
/// Binding and serving are split so callers (and tests binding port 0) learn
/// the real address before the first request.
pub struct HttpServer {
    name: &'static str,
    addr: SocketAddr,
    listener: TcpListener,
    shutdown: Arc<ShutdownManager>,
}

impl HttpServer {
    pub async fn bind(name: &'static str, bind_addr: &str) -> Result<Self, ServerError> {
        let addr: SocketAddr = bind_addr
            .parse()
            .map_err(|e: std::net::AddrParseError| ServerError::InvalidAddress {
                addr: bind_addr.to_string(),
                reason: e.to_string(),
            })?;

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        let addr = listener.local_addr()?;
        tracing::info!(service = name, %addr, "Listening");

        Ok(Self {
            name,
            addr,
            listener,
            shutdown: Arc::new(ShutdownManager::new()),
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn handle(&self) -> ServerHandle {
        ServerHandle {
            shutdown: self.shutdown.clone(),
        }
    }

    /// Serve `app` until ctrl-c, SIGTERM, or [`ServerHandle::shutdown`].
    pub async fn run(self, app: Router) -> Result<(), ServerError> {
        let make_service = ConnectionCounter::new(app.into_make_service(), self.shutdown.clone());

        let shutdown = self.shutdown.clone();
        axum::serve(self.listener, make_service)
            .with_graceful_shutdown(async move {
                if let Err(e) = shutdown.wait_for_shutdown().await {
                    tracing::warn!(error = %e, "Signal handler failed, shutting down");
                }
            })
            .into_future()
            .await?;

        self.shutdown
            .wait_for_connections(Duration::from_secs(10))
            .await;
        tracing::info!(service = self.name, "Stopped");
        Ok(())
    }
}

#[derive(Clone)]
pub struct ServerHandle {
    shutdown: Arc<ShutdownManager>,
}

impl ServerHandle {
    pub fn shutdown(&self) {
        self.shutdown.signal_shutdown();
    }
}
