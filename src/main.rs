//! Turnpike metrics proxy server
//!
//! Resolves the effective configuration from file, flags and environment,
//! then starts the proxy and metrics listeners.

use anyhow::Result;
use tracing::{debug, info};
use turnpike::config::{Config, Resolution, resolve};
use turnpike::{app_version, logging, server};

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration resolution runs to completion before any listener or
    // logging side effect. The config object owns its defaults; resolution
    // only applies deltas from file, flags and environment, in that order.
    let mut config = Config::default();
    let arguments: Vec<String> = std::env::args().skip(1).collect();

    match resolve(&mut config, &arguments)? {
        Resolution::Version => {
            println!("{}", app_version());
            // Exit status 3 is the long-standing convention for the
            // version query; keep it for compatibility.
            std::process::exit(3);
        }
        Resolution::Complete => {}
    }

    logging::init(&config.logging)?;

    info!("Starting {}", app_version());
    info!("Instance ID: {}", config.main.instance_id);
    if config.origin.url.is_empty() {
        info!("No origin configured");
    } else {
        info!("Origin: {}", config.origin.url);
    }
    debug!("Resolved configuration: {:?}", config);

    let (metrics_shutdown, metrics_addr) = server::metrics::start(&config).await?;
    let (proxy_shutdown, proxy_addr) = server::proxy::start(&config).await?;
    info!("Proxy listening on {}, metrics on {}", proxy_addr, metrics_addr);

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");

    let _ = proxy_shutdown.send(());
    let _ = metrics_shutdown.send(());

    Ok(())
}
