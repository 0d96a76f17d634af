//! Integration tests for registry building and the CLI run context

mod cli_run;
mod hasher_verification;
mod registry_end_to_end;
