//! CLI domain: parse, route, and output only.

mod output;
mod parse;
mod route;

pub use output::{format_write_outcome, map_error};
pub use parse::Cli;
pub use route::RunContext;
