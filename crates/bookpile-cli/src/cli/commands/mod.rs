//! Implementations for each CLI subcommand.

mod fetch;
mod merge;

pub use fetch::run_fetch_command;
pub use merge::run_merge_command;
