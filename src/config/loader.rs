//! Config file loading.
//!
//! Decides which file to load and merges it field-by-field onto the
//! defaults already baked into the [`Config`].
//!
//! The two paths behave differently on failure:
//! - an explicit `--config` path must load; any open or parse error is fatal
//! - the conventional default path may be absent, but when it opens and then
//!   fails to parse, that is fatal too

use super::merge::deep_merge;
use super::types::Config;
use crate::cli::Flags;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

impl Config {
    /// Load the YAML file at `path` and merge it onto this config,
    /// field-by-field. Fields the file does not mention keep their
    /// current value.
    pub fn merge_file(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed reading config file: {}", path.display()))?;

        let overlay: serde_json::Value = serde_yaml::from_str(&content)
            .with_context(|| format!("invalid YAML syntax: {}", path.display()))?;

        let base = serde_json::to_value(&*self).context("failed serializing config defaults")?;

        *self = serde_json::from_value(deep_merge(base, overlay))
            .with_context(|| format!("invalid config file: {}", path.display()))?;

        Ok(())
    }
}

/// Load the configuration file selected by the parsed flags.
///
/// With `--config` the named file is loaded and every failure propagates:
/// the operator explicitly asked for that file. Without it, the conventional
/// path in `config.main.config_file` is tried; a missing file is not an
/// error, but a present file that fails to parse is.
pub fn load_config_file(config: &mut Config, flags: &Flags) -> Result<()> {
    // An empty --config value counts as "not supplied"
    let explicit = flags
        .config
        .as_deref()
        .filter(|p| !p.as_os_str().is_empty());

    if let Some(path) = explicit {
        config.merge_file(path)?;
        return Ok(());
    }

    let default_path = config.main.config_file.clone();
    if fs::File::open(&default_path).is_ok() {
        config.merge_file(&default_path)?;
    }

    Ok(())
}
