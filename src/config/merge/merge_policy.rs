//! Merge rules: defaults, override order, conflict handling.

use crate::config::DEFAULT_OUTPUT;
use crate::scan::hasher::DEFAULT_CHUNK_SIZE;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Prefix for environment overrides, e.g. `REGISTER__REGISTRY__OUTPUT`.
pub const ENV_PREFIX: &str = "REGISTER";

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("registry.output", DEFAULT_OUTPUT)?
        .set_default("registry.recursive", true)?
        .set_default("registry.chunk_size", DEFAULT_CHUNK_SIZE as i64)?
        .set_default("registry.follow_symlinks", false)?
        .set_default("registry.on_conflict", "overwrite")
}

/// Environment source; added last so it overrides every file.
/// Nested keys use `__`: `REGISTER__REGISTRY__RECURSIVE=false`.
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator("__")
}
