//! HTTP listeners that consume the resolved configuration.
//!
//! Two independent axum listeners: the proxy front ([`proxy`]) and the
//! metrics/health endpoint ([`metrics`]). Both are thin wiring around the
//! resolved [`crate::config::Config`]; neither is started until resolution
//! has completed.

pub mod metrics;
pub mod proxy;

use axum::Router;
use std::net::SocketAddr;
use thiserror::Error;
use tokio::sync::oneshot;
use tracing::info;

/// Listener startup failures.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The configured listen address did not parse.
    #[error("invalid {name} listen address '{addr}'")]
    Address { name: &'static str, addr: String },

    /// The listener could not bind its socket.
    #[error("failed to bind {name} listener on {addr}")]
    Bind {
        name: &'static str,
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Bind `app` on `address:port` and serve it in a background task.
///
/// Returns a oneshot sender that triggers graceful shutdown, and the actual
/// bound address (useful when the configured port is 0 in tests).
pub(crate) async fn serve(
    name: &'static str,
    address: &str,
    port: u16,
    app: Router,
) -> Result<(oneshot::Sender<()>, SocketAddr), ServerError> {
    let addr: SocketAddr = format!("{address}:{port}")
        .parse()
        .map_err(|_| ServerError::Address {
            name,
            addr: format!("{address}:{port}"),
        })?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { name, addr, source })?;
    let bound_addr = listener.local_addr().map_err(|source| ServerError::Bind {
        name,
        addr,
        source,
    })?;

    info!("{} listener bound on http://{}", name, bound_addr);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
                info!("{} listener shutting down", name);
            })
            .await
        {
            tracing::error!("{} listener error: {}", name, e);
        }
    });

    Ok((shutdown_tx, bound_addr))
}
