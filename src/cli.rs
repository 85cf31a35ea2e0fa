//! Command-line flag schema for turnpike.
//!
//! This module defines the recognized flags using clap's derive macros and
//! the overlay that applies them onto a [`Config`]. There are no
//! subcommands; the binary always resolves configuration and serves.

use crate::config::Config;
use clap::Parser;
use clap::builder::TypedValueParser as _;
use std::path::PathBuf;

/// Turnpike metrics proxy
///
/// The overlay in [`Flags::apply`] is deliberately asymmetric. `log-level`
/// and `instance-id` always overwrite, because their defaults ("INFO", 0)
/// cannot be told apart from a deliberate choice. `origin`, `proxy-port` and
/// `metrics-port` only overwrite when they differ from their zero-value
/// default, so omitting them preserves whatever the config file set.
#[derive(Parser, Debug)]
#[command(name = crate::APP_NAME, about, long_about = None, disable_version_flag = true)]
pub struct Flags {
    /// Path to configuration file
    #[arg(short, long, value_parser = clap::builder::OsStringValueParser::new().map(PathBuf::from))]
    pub config: Option<PathBuf>,

    /// Print version information and exit
    #[arg(long)]
    pub version: bool,

    /// Level of logging to use (debug, info, warn, error)
    #[arg(long, default_value = "INFO")]
    pub log_level: String,

    /// Instance ID for when running multiple processes
    #[arg(long, default_value_t = 0)]
    pub instance_id: i32,

    /// URL of the metrics origin, e.g. http://prometheus:9090
    #[arg(long, default_value = "")]
    pub origin: String,

    /// Port the proxy listener binds
    #[arg(long, default_value_t = 0)]
    pub proxy_port: u16,

    /// Port the metrics listener binds
    #[arg(long, default_value_t = 0)]
    pub metrics_port: u16,
}

impl Flags {
    /// Overlay these flags onto the config (sparse/dense rules above).
    pub fn apply(&self, config: &mut Config) {
        if !self.origin.is_empty() {
            config.origin.url = self.origin.clone();
        }
        if self.proxy_port > 0 {
            config.proxy.port = self.proxy_port;
        }
        if self.metrics_port > 0 {
            config.metrics.port = self.metrics_port;
        }
        config.logging.level = self.log_level.clone();
        config.main.instance_id = self.instance_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Flags {
        Flags::try_parse_from(std::iter::once("turnpike").chain(args.iter().copied()))
            .expect("flags")
    }

    #[test]
    fn test_defaults() {
        let flags = parse(&[]);
        assert!(flags.config.is_none());
        assert!(!flags.version);
        assert_eq!(flags.log_level, "INFO");
        assert_eq!(flags.instance_id, 0);
        assert_eq!(flags.origin, "");
        assert_eq!(flags.proxy_port, 0);
        assert_eq!(flags.metrics_port, 0);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let result = Flags::try_parse_from(["turnpike", "--no-such-flag"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_numeric_port_is_rejected() {
        let result = Flags::try_parse_from(["turnpike", "--proxy-port", "eighty"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_sparse_overrides_skip_zero_values() {
        let mut config = Config::default();
        config.origin.url = "http://prometheus:9090".to_string();
        config.proxy.port = 7000;
        config.metrics.port = 7001;

        parse(&[]).apply(&mut config);

        // Zero-value flags leave the file/default values alone
        assert_eq!(config.origin.url, "http://prometheus:9090");
        assert_eq!(config.proxy.port, 7000);
        assert_eq!(config.metrics.port, 7001);
    }

    #[test]
    fn test_sparse_overrides_apply_when_set() {
        let mut config = Config::default();
        config.origin.url = "http://prometheus:9090".to_string();

        parse(&[
            "--origin",
            "http://other:9090",
            "--proxy-port",
            "8080",
            "--metrics-port",
            "8081",
        ])
        .apply(&mut config);

        assert_eq!(config.origin.url, "http://other:9090");
        assert_eq!(config.proxy.port, 8080);
        assert_eq!(config.metrics.port, 8081);
    }

    #[test]
    fn test_dense_overrides_always_apply() {
        let mut config = Config::default();
        // Simulate a config file that set both fields
        config.logging.level = "debug".to_string();
        config.main.instance_id = 7;

        parse(&[]).apply(&mut config);

        // Flag defaults clobber the file values, by design
        assert_eq!(config.logging.level, "INFO");
        assert_eq!(config.main.instance_id, 0);
    }

    #[test]
    fn test_dense_overrides_with_explicit_values() {
        let mut config = Config::default();

        parse(&["--log-level", "warn", "--instance-id", "3"]).apply(&mut config);

        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.main.instance_id, 3);
    }
}
