//! Tests for the fetch subcommand.

use super::parse;
use crate::cli::CliCommand;
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_fetch() {
    match parse(&["bookpile", "fetch", "--list", "books.jsonl", "--out", "raw"]) {
        CliCommand::Fetch {
            list,
            out,
            trash_bad_count,
            overwrite,
        } => {
            assert_eq!(list, Path::new("books.jsonl"));
            assert_eq!(out, Path::new("raw"));
            assert!(!trash_bad_count);
            assert!(!overwrite);
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_fetch_trash_bad_count() {
    match parse(&[
        "bookpile",
        "fetch",
        "--list",
        "books.jsonl",
        "--out",
        "raw",
        "--trash-bad-count",
    ]) {
        CliCommand::Fetch {
            trash_bad_count, ..
        } => assert!(trash_bad_count),
        _ => panic!("expected Fetch with --trash-bad-count"),
    }
}

#[test]
fn cli_parse_fetch_overwrite() {
    match parse(&[
        "bookpile",
        "fetch",
        "--list",
        "books.jsonl",
        "--out",
        "raw",
        "--overwrite",
    ]) {
        CliCommand::Fetch { overwrite, .. } => assert!(overwrite),
        _ => panic!("expected Fetch with --overwrite"),
    }
}

#[test]
fn cli_fetch_requires_list_and_out() {
    assert!(crate::cli::Cli::try_parse_from(["bookpile", "fetch", "--out", "raw"]).is_err());
    assert!(crate::cli::Cli::try_parse_from(["bookpile", "fetch", "--list", "x"]).is_err());
}
