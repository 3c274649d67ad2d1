//! CLI for the bookpile corpus pipeline.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use bookpile_core::config;
use std::path::PathBuf;

use commands::{run_fetch_command, run_merge_command};

/// Top-level CLI for the bookpile corpus pipeline.
#[derive(Debug, Parser)]
#[command(name = "bookpile")]
#[command(about = "bookpile: download a book list and merge it into a one-line-per-book corpus", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every book in a JSON-lines manifest into a directory.
    Fetch {
        /// Path to the manifest (one JSON object per line, with a "url" field).
        #[arg(long, value_name = "PATH")]
        list: PathBuf,

        /// Download destination directory (created if absent).
        #[arg(long, value_name = "DIR")]
        out: PathBuf,

        /// Delete downloads below the configured line/word-count thresholds.
        #[arg(long)]
        trash_bad_count: bool,

        /// Re-download files that already exist in the destination
        /// (default: re-runs skip files that are already present).
        #[arg(long)]
        overwrite: bool,
    },

    /// Merge a directory of book files into a single corpus file, one
    /// cleaned line per book.
    Merge {
        /// Directory of downloaded .txt files.
        input_dir: PathBuf,

        /// Corpus file to write (truncated if it exists).
        output_file: PathBuf,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch {
                list,
                out,
                trash_bad_count,
                overwrite,
            } => run_fetch_command(&cfg, &list, &out, trash_bad_count, overwrite)?,
            CliCommand::Merge {
                input_dir,
                output_file,
            } => run_merge_command(&input_dir, &output_file)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
