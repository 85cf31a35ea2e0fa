//! Configuration types and structures.
//!
//! `Config` is the single object the rest of the server reads its settings
//! from. It is constructed with baked-in defaults and then mutated in place
//! by the resolution pipeline (file, flags, environment).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Conventional config file location checked when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "/etc/turnpike/turnpike.yaml";

/// Default port the proxy listener binds.
pub const DEFAULT_PROXY_PORT: u16 = 9090;

/// Default port the metrics/health listener binds.
pub const DEFAULT_METRICS_PORT: u16 = 8482;

/// Runtime configuration for the server process.
///
/// Every section has full serde defaults so a partial YAML file deserializes
/// cleanly; the merge step is field-by-field, so a file that only sets
/// `proxy.port` leaves every other field at its prior value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Process-level settings (instance identity, config file path).
    #[serde(default)]
    pub main: MainConfig,

    /// Upstream origin settings.
    #[serde(default)]
    pub origin: OriginConfig,

    /// Proxy listener settings.
    #[serde(default)]
    pub proxy: ProxyConfig,

    /// Metrics listener settings.
    #[serde(default)]
    pub metrics: MetricsConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Process-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainConfig {
    /// Instance ID for when running multiple processes (default: 0).
    #[serde(default)]
    pub instance_id: i32,

    /// Config file path consulted when no `--config` flag is given.
    #[serde(default = "default_config_file")]
    pub config_file: PathBuf,
}

impl Default for MainConfig {
    fn default() -> Self {
        Self {
            instance_id: 0,
            config_file: default_config_file(),
        }
    }
}

fn default_config_file() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FILE)
}

/// Upstream origin settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OriginConfig {
    /// Base URL of the metrics origin, e.g. `http://prometheus:9090`.
    /// Empty means no origin is configured.
    #[serde(default)]
    pub url: String,
}

/// Proxy listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Address the proxy listener binds (default: all interfaces).
    #[serde(default = "default_listen_address")]
    pub address: String,

    /// Port the proxy listener binds (default: 9090).
    #[serde(default = "default_proxy_port")]
    pub port: u16,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            address: default_listen_address(),
            port: default_proxy_port(),
        }
    }
}

/// Metrics listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Address the metrics listener binds (default: all interfaces).
    #[serde(default = "default_listen_address")]
    pub address: String,

    /// Port the metrics listener binds (default: 8482).
    #[serde(default = "default_metrics_port")]
    pub port: u16,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            address: default_listen_address(),
            port: default_metrics_port(),
        }
    }
}

fn default_listen_address() -> String {
    "0.0.0.0".to_string()
}

fn default_proxy_port() -> u16 {
    DEFAULT_PROXY_PORT
}

fn default_metrics_port() -> u16 {
    DEFAULT_METRICS_PORT
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level: debug, info, warn, error (default: INFO).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path; stderr when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "INFO".to_string()
}
