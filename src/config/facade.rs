//! Config loader facade: builds a [`RegisterConfig`] from the layered sources.

use super::merge::merge_policy;
use super::sources::{global_file, workspace_file};
use super::RegisterConfig;
use crate::error::RegistryError;
use config::File;
use std::path::Path;
use tracing::debug;

/// Entry point for loading configuration.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a registry root.
    ///
    /// Precedence (lowest to highest): defaults, global file,
    /// `<root>/.register.toml`, `REGISTER__*` environment variables.
    pub fn load(root: &Path) -> Result<RegisterConfig, RegistryError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, root)?;
        let config: RegisterConfig = builder
            .add_source(merge_policy::environment())
            .build()?
            .try_deserialize()?;
        config.ensure_valid()?;

        debug!(root = %root.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from an explicit file, skipping the global and root files.
    pub fn load_from_file(path: &Path) -> Result<RegisterConfig, RegistryError> {
        if !path.is_file() {
            return Err(RegistryError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let config: RegisterConfig = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .add_source(merge_policy::environment())
            .build()?
            .try_deserialize()?;
        config.ensure_valid()?;

        debug!(config_path = %path.display(), "Configuration loaded from file");
        Ok(config)
    }
}
