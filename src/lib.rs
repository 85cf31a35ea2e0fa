//! Turnpike metrics proxy library
//!
//! This module exports the configuration resolution core and the listener
//! wiring for testing and integration.

pub mod cli;
pub mod config;
pub mod logging;
pub mod server;

/// Application name, used in the version string and flag usage output.
pub const APP_NAME: &str = "turnpike";

/// Version string printed by `--version`.
pub fn app_version() -> String {
    format!("{} {}", APP_NAME, env!("CARGO_PKG_VERSION"))
}
