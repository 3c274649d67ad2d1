//! `bookpile fetch --list <path> --out <dir>` – run the download stage.

use anyhow::Result;
use bookpile_core::config::BookpileConfig;
use bookpile_core::fetch::{run_fetch, FetchOptions};
use std::path::Path;

pub fn run_fetch_command(
    cfg: &BookpileConfig,
    list: &Path,
    out: &Path,
    trash_bad_count: bool,
    overwrite: bool,
) -> Result<()> {
    let opts = FetchOptions::from_config(cfg, trash_bad_count, overwrite);
    let report = run_fetch(list, out, &opts)?;
    println!(
        "Fetched {} of {} entries into {} ({} already present, {} failed, {} trashed)",
        report.downloaded,
        report.attempted,
        out.display(),
        report.skipped_existing,
        report.failed,
        report.trashed,
    );
    Ok(())
}
