//! CLI route: run context that resolves the root, merges settings, and runs a build.

use crate::cli::output::format_write_outcome;
use crate::cli::parse::Cli;
use crate::config::{ConfigLoader, RegisterConfig, RegistrySettings};
use crate::discovery::{MarkerRootLocator, RootLocator};
use crate::error::RegistryError;
use crate::registry::{build_registry, write_registry, WriteOutcome};
use crate::scan::path::split_dirs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Runtime context for one CLI invocation: the registry root and its configuration.
pub struct RunContext {
    root: PathBuf,
    config: RegisterConfig,
}

impl RunContext {
    /// Create run context, discovering the root from the enclosing git repository when not given.
    ///
    /// Discovery starts at the current working directory, not at the binary's install location.
    pub fn new(root: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<Self, RegistryError> {
        Self::with_locator(root, config_path, &MarkerRootLocator::git())
    }

    /// Create run context with an explicit root discovery strategy.
    pub fn with_locator(
        root: Option<PathBuf>,
        config_path: Option<PathBuf>,
        locator: &dyn RootLocator,
    ) -> Result<Self, RegistryError> {
        let root = match root {
            Some(root) => root,
            None => {
                let cwd = std::env::current_dir().map_err(|e| RegistryError::io(".", e))?;
                locator.locate(&cwd)?
            }
        };

        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&root)?,
        };

        Ok(Self { root, config })
    }

    /// Create run context from already-resolved parts.
    pub fn from_parts(root: PathBuf, config: RegisterConfig) -> Self {
        Self { root, config }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &RegisterConfig {
        &self.config
    }

    /// Registry settings with CLI flags applied over the loaded configuration.
    pub fn resolve_settings(&self, cli: &Cli) -> Result<RegistrySettings, RegistryError> {
        let mut settings = self.config.registry.clone();

        if let Some(ref dirs) = cli.dirs {
            settings.dirs = split_dirs(dirs);
        }
        if let Some(recursive) = cli.recursion() {
            settings.recursive = recursive;
        }
        if let Some(ref ext) = cli.ext {
            settings.ext = Some(ext.clone());
        }
        if let Some(ref output) = cli.output {
            settings.output = output.clone();
        }
        if cli.follow_symlinks {
            settings.follow_symlinks = true;
        }
        if let Some(chunk_size) = cli.chunk_size {
            settings.chunk_size = chunk_size;
        }
        if let Some(on_conflict) = cli.on_conflict {
            settings.on_conflict = on_conflict;
        }

        let merged = RegisterConfig {
            registry: settings,
            logging: self.config.logging.clone(),
        };
        merged.ensure_valid()?;
        Ok(merged.registry)
    }

    /// Build the registry and write it (or print it for `--dry-run`).
    pub fn execute(&self, cli: &Cli) -> Result<String, RegistryError> {
        let started = Instant::now();
        let settings = self.resolve_settings(cli)?;
        let registry = build_registry(&self.root, &settings.to_scan_options())?;

        if cli.dry_run {
            info!(entries = registry.len(), "Dry run, registry not written");
            if registry.is_empty() {
                return Ok(format_write_outcome(&WriteOutcome::Skipped));
            }
            return Ok(registry.render());
        }

        let outcome = write_registry(&registry, &self.root.join(&settings.output))?;
        info!(
            duration_ms = started.elapsed().as_millis() as u64,
            "Command completed"
        );
        Ok(format_write_outcome(&outcome))
    }
}
