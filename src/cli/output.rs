//! CLI output: error mapping and result summaries.

use crate::error::RegistryError;
use crate::registry::WriteOutcome;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &RegistryError) -> String {
    format!("error: {}", e)
}

/// One-line summary of a registry write.
pub fn format_write_outcome(outcome: &WriteOutcome) -> String {
    match outcome {
        WriteOutcome::Written { path, entries } => {
            let noun = if *entries == 1 { "entry" } else { "entries" };
            format!("Wrote {} {} to {}", entries, noun, path.display())
        }
        WriteOutcome::Skipped => "No matching files; registry not written".to_string(),
    }
}
