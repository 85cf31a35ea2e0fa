//! Environment variable overlay.
//!
//! Applied strictly after the flag overlay, so environment variables have
//! the highest precedence of the three sources. A variable that is present
//! but fails type conversion is skipped on its own; a broken environment
//! value never prevents startup.

use super::types::Config;

/// Origin base URL override.
pub const ENV_ORIGIN: &str = "TURNPIKE_ORIGIN";
/// Proxy listener port override.
pub const ENV_PROXY_PORT: &str = "TURNPIKE_PROXY_PORT";
/// Metrics listener port override.
pub const ENV_METRICS_PORT: &str = "TURNPIKE_METRICS_PORT";
/// Log level override.
pub const ENV_LOG_LEVEL: &str = "TURNPIKE_LOG_LEVEL";

/// Read a variable, treating absent and empty as "not set".
fn lookup(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Overlay recognized environment variables onto the config.
pub fn apply_env_vars(config: &mut Config) {
    if let Some(url) = lookup(ENV_ORIGIN) {
        config.origin.url = url;
    }

    if let Some(port) = lookup(ENV_PROXY_PORT)
        && let Ok(port) = port.parse::<u16>()
    {
        config.proxy.port = port;
    }

    if let Some(port) = lookup(ENV_METRICS_PORT)
        && let Ok(port) = port.parse::<u16>()
    {
        config.metrics.port = port;
    }

    if let Some(level) = lookup(ENV_LOG_LEVEL) {
        config.logging.level = level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set(name: &str, value: &str) {
        // SAFETY: tests touching the process environment are serialized
        unsafe { std::env::set_var(name, value) }
    }

    fn unset(name: &str) {
        // SAFETY: see set()
        unsafe { std::env::remove_var(name) }
    }

    fn clear_all() {
        for name in [ENV_ORIGIN, ENV_PROXY_PORT, ENV_METRICS_PORT, ENV_LOG_LEVEL] {
            unset(name);
        }
    }

    #[test]
    #[serial]
    fn test_all_variables_applied() {
        clear_all();
        set(ENV_ORIGIN, "http://prometheus:9090");
        set(ENV_PROXY_PORT, "18080");
        set(ENV_METRICS_PORT, "18081");
        set(ENV_LOG_LEVEL, "debug");

        let mut config = Config::default();
        apply_env_vars(&mut config);

        assert_eq!(config.origin.url, "http://prometheus:9090");
        assert_eq!(config.proxy.port, 18080);
        assert_eq!(config.metrics.port, 18081);
        assert_eq!(config.logging.level, "debug");
        clear_all();
    }

    #[test]
    #[serial]
    fn test_absent_variables_leave_config_untouched() {
        clear_all();
        let mut config = Config::default();
        config.origin.url = "http://origin:9090".to_string();
        config.proxy.port = 7000;

        apply_env_vars(&mut config);

        assert_eq!(config.origin.url, "http://origin:9090");
        assert_eq!(config.proxy.port, 7000);
    }

    #[test]
    #[serial]
    fn test_empty_variable_is_not_set() {
        clear_all();
        set(ENV_ORIGIN, "");

        let mut config = Config::default();
        config.origin.url = "http://origin:9090".to_string();
        apply_env_vars(&mut config);

        assert_eq!(config.origin.url, "http://origin:9090");
        clear_all();
    }

    #[test]
    #[serial]
    fn test_non_numeric_port_skips_only_that_field() {
        clear_all();
        set(ENV_PROXY_PORT, "not-a-port");
        set(ENV_METRICS_PORT, "18081");

        let mut config = Config::default();
        config.proxy.port = 7000;
        apply_env_vars(&mut config);

        // Bad value skipped, the rest still applied
        assert_eq!(config.proxy.port, 7000);
        assert_eq!(config.metrics.port, 18081);
        clear_all();
    }
}
