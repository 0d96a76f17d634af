//! Filesystem scanning
//!
//! Expands scan directories into files, hashes them, and turns their paths
//! into registry keys.

pub mod hasher;
pub mod path;
pub mod walker;
