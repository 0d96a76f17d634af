//! Register: SHA-256 file registries
//!
//! Scans directories under a root, hashes every matching file, and writes a
//! sorted `<relative-path> <digest>` manifest for download verification tools.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod registry;
pub mod scan;

pub use error::RegistryError;
pub use registry::{build_registry, write_registry, ConflictPolicy, Registry, ScanOptions, WriteOutcome};
