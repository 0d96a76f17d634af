//! Root discovery
//!
//! Finds the default registry root when none is given. Registry building never
//! calls this itself; the CLI picks a locator and passes the resulting root in.

use crate::error::RegistryError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Strategy for locating a registry root from a starting directory
pub trait RootLocator {
    fn locate(&self, start: &Path) -> Result<PathBuf, RegistryError>;
}

/// Nearest ancestor (including `start`) that contains one of the marker entries
#[derive(Debug, Clone)]
pub struct MarkerRootLocator {
    markers: Vec<String>,
}

impl MarkerRootLocator {
    pub fn new(markers: Vec<String>) -> Self {
        Self { markers }
    }

    /// Version-control root: `.git` as a directory, or as a file for worktrees and submodules
    pub fn git() -> Self {
        Self::new(vec![".git".to_string()])
    }
}

impl RootLocator for MarkerRootLocator {
    fn locate(&self, start: &Path) -> Result<PathBuf, RegistryError> {
        let start = dunce::canonicalize(start).map_err(|e| RegistryError::io(start, e))?;

        for dir in start.ancestors() {
            if let Some(marker) = self.markers.iter().find(|m| dir.join(m).exists()) {
                debug!(root = %dir.display(), marker = %marker, "Discovered root");
                return Ok(dir.to_path_buf());
            }
        }

        Err(RegistryError::NotFound {
            path: start.join(self.markers.join("|")),
        })
    }
}

/// Locator that always returns the same root
#[derive(Debug, Clone)]
pub struct FixedRoot(pub PathBuf);

impl RootLocator for FixedRoot {
    fn locate(&self, _start: &Path) -> Result<PathBuf, RegistryError> {
        Ok(self.0.clone())
    }
}
