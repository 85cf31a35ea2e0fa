//! Configuration resolution orchestrator.
//!
//! Produces the effective configuration from the three competing sources in
//! a fixed, total order:
//!
//! ```text
//! defaults < configuration file < command-line flags < environment
//! ```
//!
//! Later sources overwrite earlier ones field-by-field; a source with no
//! stated value for a field leaves it in whatever state the previous step
//! left it. The whole sequence is linear and runs once at startup, before
//! any listener is started.

use super::env::apply_env_vars;
use super::loader::load_config_file;
use super::types::Config;
use crate::cli::Flags;
use anyhow::Result;
use clap::Parser;

/// Terminal state of a resolution run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The config is fully resolved and the server may start.
    Complete,
    /// `--version` was given; the caller prints the version string and
    /// exits with status 3. No file or environment access has happened.
    Version,
}

/// Resolve the effective configuration from `arguments` (the process
/// arguments without the program name) onto `config`, which arrives
/// pre-populated with defaults and is mutated in place.
///
/// Malformed arguments terminate the process through clap's own exit path,
/// matching the parser's fatal-exit convention. A fatal config file error
/// propagates to the caller with `config` left partially populated;
/// resolution is aborted at that point and the config must not be used.
pub fn resolve(config: &mut Config, arguments: &[String]) -> Result<Resolution> {
    let flags = Flags::try_parse_from(
        std::iter::once(crate::APP_NAME).chain(arguments.iter().map(String::as_str)),
    )
    .unwrap_or_else(|e| e.exit());

    // Version short-circuit happens before any other side effect
    if flags.version {
        return Ok(Resolution::Version);
    }

    load_config_file(config, &flags)?;

    flags.apply(config);

    apply_env_vars(config);

    Ok(Resolution::Complete)
}
