//! Registry construction and serialization
//!
//! A registry maps root-relative file paths to the SHA-256 digest of each
//! file. It is built fresh from the filesystem on every run and serialized as
//! `<path> <digest>` lines sorted by path.

use crate::error::RegistryError;
use crate::scan::hasher::{self, Digest, DEFAULT_CHUNK_SIZE};
use crate::scan::path::relative_key;
use crate::scan::walker::{Walker, WalkerConfig};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// What to do when two scan directories reach the same relative path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Later directories overwrite earlier ones
    #[default]
    Overwrite,
    /// Fail the build with [`RegistryError::DuplicateEntry`]
    Error,
}

/// Options for one registry build
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Directories relative to the root; empty list or empty entry means the root itself
    pub dirs: Vec<String>,
    pub recursive: bool,
    /// Keep only files whose name ends with this suffix
    pub ext: Option<String>,
    pub chunk_size: usize,
    pub follow_symlinks: bool,
    pub on_conflict: ConflictPolicy,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            dirs: Vec::new(),
            recursive: true,
            ext: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
            follow_symlinks: false,
            on_conflict: ConflictPolicy::Overwrite,
        }
    }
}

/// Mapping from relative path to digest
///
/// Iteration order of the underlying map is unspecified; use [`Registry::entries`]
/// or [`Registry::render`] for sorted output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: HashMap<String, Digest>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Digest> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert an entry, returning the digest it replaced
    pub fn insert(&mut self, key: String, digest: Digest) -> Option<Digest> {
        self.entries.insert(key, digest)
    }

    /// Entries sorted by path (byte order)
    pub fn entries(&self) -> Vec<(&str, &Digest)> {
        let mut sorted: Vec<_> = self
            .entries
            .iter()
            .map(|(key, digest)| (key.as_str(), digest))
            .collect();
        sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));
        sorted
    }

    /// Serialized registry text: one `<path> <digest>` line per entry, sorted, newline-terminated
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (key, digest) in self.entries() {
            out.push_str(key);
            out.push(' ');
            out.push_str(digest.as_str());
            out.push('\n');
        }
        out
    }
}

/// Build a registry for `root` by scanning each requested directory
///
/// Fails on the first missing directory or unreadable file; nothing partial is returned.
#[instrument(skip_all, fields(root = %root.display()))]
pub fn build_registry(root: &Path, options: &ScanOptions) -> Result<Registry, RegistryError> {
    let start = Instant::now();
    require_dir(root)?;

    let walker_config = WalkerConfig {
        recursive: options.recursive,
        ext: options.ext.clone(),
        follow_symlinks: options.follow_symlinks,
    };

    let default_dirs = [String::new()];
    let dirs: &[String] = if options.dirs.is_empty() {
        &default_dirs
    } else {
        &options.dirs
    };

    let mut registry = Registry::new();
    for dir in dirs {
        let scan_dir = root.join(dir);
        require_dir(&scan_dir)?;

        let files = Walker::with_config(scan_dir.clone(), walker_config.clone()).walk()?;
        info!(
            dir = %scan_dir.display(),
            files = files.len(),
            "Scanning directory"
        );

        for file in files {
            let key = relative_key(root, &file)?;
            match (registry.entries.entry(key), options.on_conflict) {
                (Entry::Occupied(existing), ConflictPolicy::Error) => {
                    return Err(RegistryError::DuplicateEntry {
                        path: existing.key().clone(),
                    });
                }
                (Entry::Occupied(mut existing), ConflictPolicy::Overwrite) => {
                    debug!(key = %existing.key(), "Overwriting duplicate entry");
                    let digest = hasher::file_digest_with_chunk_size(&file, options.chunk_size)?;
                    existing.insert(digest);
                }
                (Entry::Vacant(slot), _) => {
                    let digest = hasher::file_digest_with_chunk_size(&file, options.chunk_size)?;
                    debug!(key = %slot.key(), digest = %digest, "Hashed file");
                    slot.insert(digest);
                }
            }
        }
    }

    info!(
        entries = registry.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Registry built"
    );
    Ok(registry)
}

/// Result of [`write_registry`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The registry file was written
    Written { path: PathBuf, entries: usize },
    /// The registry was empty; no file was created or modified
    Skipped,
}

/// Write the registry to `output`
///
/// An empty registry writes nothing. Otherwise the text is written to a
/// temporary sibling file and renamed into place.
pub fn write_registry(registry: &Registry, output: &Path) -> Result<WriteOutcome, RegistryError> {
    if registry.is_empty() {
        info!(output = %output.display(), "Registry empty, not writing");
        return Ok(WriteOutcome::Skipped);
    }

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| RegistryError::io(parent, e))?;
        }
    }

    let file_name = output
        .file_name()
        .ok_or_else(|| {
            RegistryError::InvalidPath(format!("{} has no file name", output.display()))
        })?
        .to_string_lossy();
    let temp_path = output.with_file_name(format!(".{}.tmp", file_name));

    let write_temp = || -> std::io::Result<()> {
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(registry.render().as_bytes())?;
        file.sync_all()
    };
    if let Err(e) = write_temp() {
        let _ = fs::remove_file(&temp_path);
        return Err(RegistryError::io(&temp_path, e));
    }

    if let Err(e) = fs::rename(&temp_path, output) {
        let _ = fs::remove_file(&temp_path);
        return Err(RegistryError::io(output, e));
    }

    info!(output = %output.display(), entries = registry.len(), "Registry written");
    Ok(WriteOutcome::Written {
        path: output.to_path_buf(),
        entries: registry.len(),
    })
}

fn require_dir(path: &Path) -> Result<(), RegistryError> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(RegistryError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(RegistryError::io(path, e)),
    }
}
