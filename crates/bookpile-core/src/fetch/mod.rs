//! The fetcher: manifest in, directory of validated book files out.
//!
//! Strictly sequential over manifest entries. A failing entry is logged and
//! counted, never retried. With trashing enabled, downloads below the
//! line/word thresholds are deleted so they never reach the merger.

mod error;
mod get;

pub use error::FetchError;
pub use get::GetOptions;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::config::{BookpileConfig, QualityConfig};
use crate::filename::derive_filename;
use crate::manifest::read_manifest;
use crate::quality::{self, Verdict};
use crate::storage::{ensure_dir, TempDownload};
use crate::textclean;

/// Options for one fetch run, assembled from config plus CLI flags.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Delete downloads that fail the line/word-count check.
    pub trash_bad_count: bool,
    /// Re-download files already present in the output directory.
    pub overwrite: bool,
    pub quality: QualityConfig,
    pub get: GetOptions,
}

impl FetchOptions {
    /// Defaults from config; `trash_bad_count` comes from the CLI flag,
    /// `overwrite` is the CLI flag OR'd with the config setting.
    pub fn from_config(cfg: &BookpileConfig, trash_bad_count: bool, overwrite: bool) -> Self {
        Self {
            trash_bad_count,
            overwrite: overwrite || cfg.overwrite_existing,
            quality: cfg.quality.clone().unwrap_or_default(),
            get: GetOptions {
                connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
                transfer_timeout: Duration::from_secs(cfg.transfer_timeout_secs),
                user_agent: cfg.user_agent.clone(),
            },
        }
    }
}

/// Counters for one fetch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchReport {
    /// Manifest entries processed (excludes malformed lines).
    pub attempted: usize,
    /// Files downloaded, validated, and kept.
    pub downloaded: usize,
    /// Entries skipped because the target file already existed.
    pub skipped_existing: usize,
    /// Entries whose download failed (network, HTTP status, or disk).
    pub failed: usize,
    /// Downloads deleted by the quality check.
    pub trashed: usize,
}

/// Runs the fetch stage: download every manifest entry into `out_dir`.
///
/// Fatal errors are limited to setup (unreadable manifest, uncreatable
/// output directory); per-entry failures only bump `failed`.
pub fn run_fetch(manifest_path: &Path, out_dir: &Path, opts: &FetchOptions) -> Result<FetchReport> {
    let manifest = read_manifest(manifest_path)?;
    ensure_dir(out_dir)?;

    if manifest.malformed_lines > 0 {
        tracing::warn!(
            skipped = manifest.malformed_lines,
            "manifest had unparseable lines"
        );
    }

    let mut report = FetchReport::default();

    for entry in &manifest.entries {
        report.attempted += 1;
        let name = derive_filename(&entry.url, entry.id.as_deref());
        let dest = out_dir.join(&name);

        if dest.exists() && !opts.overwrite {
            tracing::debug!(file = %name, "already present, skipping");
            report.skipped_existing += 1;
            continue;
        }

        match fetch_one(&entry.url, &dest, opts) {
            Ok(FetchOutcome::Kept { bytes }) => {
                tracing::info!(file = %name, bytes, "downloaded");
                report.downloaded += 1;
            }
            Ok(FetchOutcome::Trashed { reason }) => {
                tracing::info!(file = %name, %reason, "trashed undersized download");
                report.trashed += 1;
            }
            Err(e) => {
                tracing::warn!(url = %entry.url, error = %e, "fetch failed, skipping entry");
                report.failed += 1;
            }
        }
    }

    tracing::info!(
        attempted = report.attempted,
        downloaded = report.downloaded,
        skipped = report.skipped_existing,
        failed = report.failed,
        trashed = report.trashed,
        "fetch finished"
    );
    Ok(report)
}

enum FetchOutcome {
    Kept { bytes: u64 },
    Trashed { reason: String },
}

/// Downloads one URL to `dest` via a `.part` temp file, then applies the
/// quality check if enabled.
fn fetch_one(url: &str, dest: &Path, opts: &FetchOptions) -> Result<FetchOutcome> {
    let mut temp = TempDownload::create(dest)?;
    let bytes = match get::download_to(url, &mut temp, &opts.get) {
        Ok(n) => n,
        Err(e) => {
            temp.discard();
            return Err(e.into());
        }
    };
    temp.finalize()?;

    if opts.trash_bad_count {
        if let Some(reason) = trash_if_undersized(dest, &opts.quality)? {
            return Ok(FetchOutcome::Trashed { reason });
        }
    }
    Ok(FetchOutcome::Kept { bytes })
}

/// Measures the finalized file and deletes it when it falls below the
/// thresholds. Returns the trash reason, or `None` when the file is kept.
pub fn trash_if_undersized(path: &Path, thresholds: &QualityConfig) -> Result<Option<String>> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read back {}", path.display()))?;
    let text = textclean::decode_text(&bytes);
    let stats = quality::measure(&text);
    match quality::check(stats, thresholds) {
        Verdict::Keep => Ok(None),
        Verdict::Trash { reason } => {
            fs::remove_file(path)
                .with_context(|| format!("failed to trash {}", path.display()))?;
            Ok(Some(reason))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QualityConfig;

    #[test]
    fn trash_deletes_undersized_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.txt");
        fs::write(&path, "only two\n").unwrap();

        let thresholds = QualityConfig {
            min_lines: 1,
            min_words: 10,
        };
        let reason = trash_if_undersized(&path, &thresholds).unwrap();
        assert!(reason.is_some());
        assert!(!path.exists());
    }

    #[test]
    fn trash_keeps_file_meeting_thresholds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.txt");
        fs::write(&path, "one two three four five\nsix seven eight nine ten\n").unwrap();

        let thresholds = QualityConfig {
            min_lines: 2,
            min_words: 10,
        };
        let reason = trash_if_undersized(&path, &thresholds).unwrap();
        assert!(reason.is_none());
        assert!(path.exists());
    }

    #[test]
    fn fetch_options_overwrite_or() {
        let mut cfg = BookpileConfig::default();
        cfg.overwrite_existing = true;
        let opts = FetchOptions::from_config(&cfg, false, false);
        assert!(opts.overwrite);

        cfg.overwrite_existing = false;
        let opts = FetchOptions::from_config(&cfg, true, true);
        assert!(opts.trash_bad_count);
        assert!(opts.overwrite);
    }
}
