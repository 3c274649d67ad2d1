//! Tests for the merge subcommand.

use super::parse;
use crate::cli::CliCommand;
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_merge() {
    match parse(&["bookpile", "merge", "raw", "corpus.txt"]) {
        CliCommand::Merge {
            input_dir,
            output_file,
        } => {
            assert_eq!(input_dir, Path::new("raw"));
            assert_eq!(output_file, Path::new("corpus.txt"));
        }
        _ => panic!("expected Merge"),
    }
}

#[test]
fn cli_merge_requires_both_positionals() {
    assert!(crate::cli::Cli::try_parse_from(["bookpile", "merge", "raw"]).is_err());
    assert!(crate::cli::Cli::try_parse_from(["bookpile", "merge"]).is_err());
}
