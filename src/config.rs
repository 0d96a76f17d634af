//! Configuration System
//!
//! Layered configuration for registry builds: built-in defaults, a global
//! user file, a file in the registry root, and `REGISTER__`-prefixed
//! environment variables. CLI flags are applied on top by the caller.

use crate::error::RegistryError;
use crate::logging::LoggingConfig;
use crate::registry::{ConflictPolicy, ScanOptions};
use crate::scan::hasher::DEFAULT_CHUNK_SIZE;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Default registry file name, relative to the root
pub const DEFAULT_OUTPUT: &str = "pooch-registry.txt";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterConfig {
    /// Registry build settings
    #[serde(default)]
    pub registry: RegistrySettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for building and writing a registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySettings {
    /// Output file name, relative to the root
    #[serde(default = "default_output")]
    pub output: String,

    /// Directories to scan, relative to the root (empty: the root itself)
    #[serde(default)]
    pub dirs: Vec<String>,

    #[serde(default = "default_true")]
    pub recursive: bool,

    /// File-name suffix filter; empty or absent means all files
    #[serde(default)]
    pub ext: Option<String>,

    /// Read size used while hashing
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    #[serde(default)]
    pub follow_symlinks: bool,

    #[serde(default)]
    pub on_conflict: ConflictPolicy,
}

fn default_output() -> String {
    DEFAULT_OUTPUT.to_string()
}

fn default_true() -> bool {
    true
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            output: default_output(),
            dirs: Vec::new(),
            recursive: default_true(),
            ext: None,
            chunk_size: default_chunk_size(),
            follow_symlinks: false,
            on_conflict: ConflictPolicy::default(),
        }
    }
}

impl RegistrySettings {
    /// Validate registry settings, collecting every problem
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        if self.output.is_empty() {
            errors.push("output cannot be empty".to_string());
        }
        if self.chunk_size == 0 {
            errors.push("chunk_size must be greater than zero".to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Convert into options for a registry build
    pub fn to_scan_options(&self) -> ScanOptions {
        ScanOptions {
            dirs: self.dirs.clone(),
            recursive: self.recursive,
            ext: self.ext.clone().filter(|ext| !ext.is_empty()),
            chunk_size: self.chunk_size,
            follow_symlinks: self.follow_symlinks,
            on_conflict: self.on_conflict,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Registry(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Registry(msg) => write!(f, "registry: {}", msg),
            ValidationError::Logging(msg) => write!(f, "logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl RegisterConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(registry_errors) = self.registry.validate() {
            errors.extend(registry_errors.into_iter().map(ValidationError::Registry));
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            errors.push(ValidationError::Logging(format!(
                "invalid format '{}' (must be 'text' or 'json')",
                self.logging.format
            )));
        }
        if !matches!(self.logging.output.as_str(), "stdout" | "stderr" | "file") {
            errors.push(ValidationError::Logging(format!(
                "invalid output '{}' (must be 'stdout', 'stderr', or 'file')",
                self.logging.output
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and fold all errors into one [`RegistryError::Config`]
    pub fn ensure_valid(&self) -> Result<(), RegistryError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            RegistryError::Config(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })
    }
}
