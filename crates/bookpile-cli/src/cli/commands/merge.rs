//! `bookpile merge <input-dir> <output-file>` – run the merge stage.

use anyhow::Result;
use bookpile_core::merge::run_merge;
use std::path::Path;

pub fn run_merge_command(input_dir: &Path, output_file: &Path) -> Result<()> {
    let report = run_merge(input_dir, output_file)?;
    println!(
        "Merged {} books into {} ({} unreadable files skipped)",
        report.merged,
        output_file.display(),
        report.skipped,
    );
    Ok(())
}
