//! Configuration file loading for invoke-smoke
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SMOKE_`-prefixed environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./smoke.toml` or `./.smoke.toml`
//! 4. Global: `invoke-smoke/config.toml` under the platform config dir
//! 5. Default values
//!
//! CLI flags are applied on top of the loaded configuration by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileOutputConfig, FileOutputFormat, FileRunConfig,
    FileTargetConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
