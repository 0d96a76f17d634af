//! Filesystem walker expanding a directory into the files a registry covers

use crate::error::RegistryError;
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::WalkDir;

/// Walker configuration
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Descend into every subdirectory (`**/*`) instead of only the top level (`*`)
    pub recursive: bool,
    /// Keep only files whose name ends with this suffix
    pub ext: Option<String>,
    /// Descend into symlinked directories (default: false). Symlinks to files are always kept.
    pub follow_symlinks: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            recursive: true,
            ext: None,
            follow_symlinks: false,
        }
    }
}

/// Filesystem walker rooted at one scan directory
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Collect every regular file below the walk root that passes the filters
    ///
    /// The walk root itself is never returned. Returns paths sorted for determinism.
    pub fn walk(&self) -> Result<Vec<PathBuf>, RegistryError> {
        let max_depth = if self.config.recursive { usize::MAX } else { 1 };
        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .min_depth(1)
            .max_depth(max_depth);

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| match e.io_error().map(|io| io.kind()) {
                Some(std::io::ErrorKind::NotFound) => RegistryError::NotFound {
                    path: e.path().unwrap_or(&self.root).to_path_buf(),
                },
                _ => RegistryError::Walk(e.to_string()),
            })?;

            if !self.matches_ext(entry.file_name().to_string_lossy().as_ref()) {
                continue;
            }

            let path = entry.into_path();
            // `is_file` follows symlinks: links to files stay, links to directories drop out
            if is_regular_file(&path) {
                trace!(path = %path.display(), "Matched file");
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    fn matches_ext(&self, name: &str) -> bool {
        match &self.config.ext {
            Some(ext) => name.ends_with(ext.as_str()),
            None => true,
        }
    }
}

fn is_regular_file(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|m| m.is_file())
        .unwrap_or(false)
}
