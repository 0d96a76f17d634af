//! CLI parse: clap types for register. No behavior; definitions only.

use crate::registry::ConflictPolicy;
use clap::Parser;
use std::path::PathBuf;

/// Write a sorted SHA-256 registry of files under a root directory
#[derive(Debug, Parser)]
#[command(name = "register")]
#[command(about = "Write a sorted SHA-256 registry of files under a root directory")]
pub struct Cli {
    /// Register paths relative to this root (default: nearest enclosing git repository)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Comma separated list of directories relative to root to include
    #[arg(short = 'd', long)]
    pub dirs: Option<String>,

    /// Recurse through the listed directories (default)
    #[arg(short = 'r', long, overrides_with = "no_recursive")]
    pub recursive: bool,

    /// Only include the top level of each listed directory
    #[arg(long, overrides_with = "recursive")]
    pub no_recursive: bool,

    /// Limit the search to file names ending with this suffix
    #[arg(long)]
    pub ext: Option<String>,

    /// Registry file name, relative to root
    #[arg(short = 'o', long)]
    pub output: Option<String>,

    /// Descend into symlinked directories
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Read size in bytes used while hashing
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// What to do when two directories reach the same file
    #[arg(long, value_enum)]
    pub on_conflict: Option<ConflictPolicy>,

    /// Print the registry to stdout instead of writing the file
    #[arg(long)]
    pub dry_run: bool,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Disable logging
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Recursion requested on the command line, if any
    pub fn recursion(&self) -> Option<bool> {
        if self.recursive {
            Some(true)
        } else if self.no_recursive {
            Some(false)
        } else {
            None
        }
    }
}
