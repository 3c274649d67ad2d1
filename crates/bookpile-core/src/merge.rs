//! The merger: directory of book files in, one-line-per-book corpus out.
//!
//! Files are processed in filename order so re-running on an unchanged
//! directory reproduces the corpus byte for byte. An unreadable file is
//! skipped with a warning; cleaning itself cannot fail.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::textclean::clean_book;

/// Counters for one merge run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Corpus lines written (one per merged file).
    pub merged: usize,
    /// Files skipped because they could not be read.
    pub skipped: usize,
}

/// Lists the `.txt` files in `input_dir`, sorted by filename.
/// Leftover `.part` temp files and subdirectories are ignored.
fn book_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(input_dir)
        .with_context(|| format!("failed to read input directory: {}", input_dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("failed to read input directory: {}", input_dir.display()))?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|e| e == "txt") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Runs the merge stage: clean every book in `input_dir` into one line of
/// `output_path`. The output file is truncated first, then one
/// newline-terminated line is appended per readable book.
pub fn run_merge(input_dir: &Path, output_path: &Path) -> Result<MergeReport> {
    let mut files = book_files(input_dir)?;

    // If a previous corpus file sits inside the input directory, don't merge
    // it into itself.
    if let Ok(out_abs) = output_path.canonicalize() {
        files.retain(|p| p.canonicalize().map(|c| c != out_abs).unwrap_or(true));
    }

    let out = File::create(output_path)
        .with_context(|| format!("failed to create corpus file: {}", output_path.display()))?;
    let mut writer = BufWriter::new(out);

    let mut report = MergeReport::default();

    for path in &files {
        let bytes = match fs::read(path) {
            Ok(b) => b,
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "unreadable, skipping");
                report.skipped += 1;
                continue;
            }
        };
        let line = clean_book(&bytes);
        writer
            .write_all(line.as_bytes())
            .and_then(|()| writer.write_all(b"\n"))
            .with_context(|| format!("failed to write corpus: {}", output_path.display()))?;
        report.merged += 1;
    }

    writer
        .flush()
        .with_context(|| format!("failed to write corpus: {}", output_path.display()))?;

    tracing::info!(
        merged = report.merged,
        skipped = report.skipped,
        corpus = %output_path.display(),
        "merge finished"
    );
    Ok(report)
}
