//! Metrics and health listener.
//!
//! Serves `GET /health` (JSON status) and `GET /metrics` (plain-text
//! exposition) on the configured metrics address.

use axum::{Router, extract::State, response::Json, routing::get};
use chrono::{DateTime, Utc};
use std::net::SocketAddr;
use std::time::Instant;
use tokio::sync::oneshot;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::ServerError;
use crate::config::Config;

/// State shared across metrics handlers.
#[derive(Clone)]
pub struct MetricsServer {
    /// Process start instant, for the uptime gauge.
    started: Instant,
    /// Wall-clock start time reported by /health.
    started_at: DateTime<Utc>,
    /// Instance ID from the resolved config.
    instance_id: i32,
}

impl MetricsServer {
    fn new(instance_id: i32) -> Self {
        Self {
            started: Instant::now(),
            started_at: Utc::now(),
            instance_id,
        }
    }

    /// Seconds since the listener started.
    fn uptime_seconds(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}

/// Health check response.
#[derive(serde::Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    instance_id: i32,
    started_at: DateTime<Utc>,
}

async fn health(State(state): State<MetricsServer>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        instance_id: state.instance_id,
        started_at: state.started_at,
    })
}

/// Render the plain-text exposition body.
fn render_exposition(instance_id: i32, uptime_seconds: u64) -> String {
    format!(
        "# HELP turnpike_up Whether the turnpike process is up.\n\
         # TYPE turnpike_up gauge\n\
         turnpike_up 1\n\
         # HELP turnpike_uptime_seconds Seconds since process start.\n\
         # TYPE turnpike_uptime_seconds counter\n\
         turnpike_uptime_seconds {uptime_seconds}\n\
         # HELP turnpike_instance_id Configured instance identifier.\n\
         # TYPE turnpike_instance_id gauge\n\
         turnpike_instance_id {instance_id}\n"
    )
}

async fn metrics(State(state): State<MetricsServer>) -> String {
    render_exposition(state.instance_id, state.uptime_seconds())
}

/// Build the metrics router.
fn build_router(state: MetricsServer) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);

    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the metrics listener on the configured address and port.
pub async fn start(config: &Config) -> Result<(oneshot::Sender<()>, SocketAddr), ServerError> {
    let app = build_router(MetricsServer::new(config.main.instance_id));
    super::serve("metrics", &config.metrics.address, config.metrics.port, app).await
}
