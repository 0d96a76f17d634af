//! Merge: defaults and override order for configuration sources.

pub mod merge_policy;
