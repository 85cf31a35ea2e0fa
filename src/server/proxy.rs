//! Proxy front listener.
//!
//! Binds the configured proxy address and answers `GET /ping` for liveness
//! probes. Requests for anything else are rejected with a gateway error
//! naming the configured origin; the acceleration engine that would forward
//! them sits behind this listener and is wired in separately.

use axum::{
    Router,
    extract::State,
    http::{StatusCode, Uri},
    routing::get,
};
use std::net::SocketAddr;
use tokio::sync::oneshot;
use tower_http::trace::TraceLayer;
use tracing::debug;

use super::ServerError;
use crate::config::Config;

/// State shared across proxy handlers.
#[derive(Clone)]
pub struct ProxyServer {
    /// Origin URL from the resolved config; empty when unconfigured.
    origin_url: String,
}

async fn ping() -> &'static str {
    "pong"
}

async fn upstream(State(state): State<ProxyServer>, uri: Uri) -> (StatusCode, String) {
    debug!("upstream request for {}", uri);

    if state.origin_url.is_empty() {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            "no origin configured; set origin.url, --origin, or TURNPIKE_ORIGIN\n".to_string(),
        );
    }

    (
        StatusCode::BAD_GATEWAY,
        format!("no route to origin {}\n", state.origin_url),
    )
}

/// Build the proxy router.
fn build_router(state: ProxyServer) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .fallback(upstream)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the proxy listener on the configured address and port.
pub async fn start(config: &Config) -> Result<(oneshot::Sender<()>, SocketAddr), ServerError> {
    let app = build_router(ProxyServer {
        origin_url: config.origin.url.clone(),
    });
    super::serve("proxy", &config.proxy.address, config.proxy.port, app).await
}
