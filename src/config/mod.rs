//! Configuration resolution for the turnpike server.
//!
//! The effective runtime configuration is resolved once at startup from
//! three competing sources, overlaid field-by-field in a fixed order:
//! 1. **Defaults** - baked into [`Config::default`]
//! 2. **File** - explicit `--config` path, or the conventional
//!    `/etc/turnpike/turnpike.yaml` when present
//! 3. **Flags** - command-line overrides ([`crate::cli::Flags`])
//! 4. **Environment** - `TURNPIKE_*` variables (highest precedence)
//!
//! Resolution is deterministic and free of side effects beyond mutating the
//! caller's [`Config`]; nothing here logs, retries, or touches the network.

pub mod env;
mod loader;
mod merge;
mod resolve;
mod types;

pub use loader::load_config_file;
pub use merge::deep_merge;
pub use resolve::{Resolution, resolve};
pub use types::*;
