//! JSON-lines manifest parsing.
//!
//! One JSON object per line; minimally a `url` field, optionally an `id`
//! and `title`. Unknown fields are ignored so manifests produced by other
//! tooling keep working.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One record of the download manifest. Immutable input.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestEntry {
    /// Direct HTTP/HTTPS URL of the book text.
    pub url: String,
    /// Optional stable identifier; preferred over the URL path for the local filename.
    #[serde(default)]
    pub id: Option<String>,
    /// Optional human-readable title (not used for naming).
    #[serde(default)]
    pub title: Option<String>,
}

/// Result of reading a manifest: entries in file order, plus the count of
/// lines that could not be parsed (skipped with a warning, never fatal).
#[derive(Debug)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
    pub malformed_lines: usize,
}

/// Reads a JSON-lines manifest from `path`.
///
/// Blank lines are skipped silently. Lines that fail to parse as a manifest
/// record are skipped with a warning and counted in `malformed_lines`.
/// An unreadable file is a fatal error.
pub fn read_manifest(path: &Path) -> Result<Manifest> {
    let file = File::open(path)
        .with_context(|| format!("failed to open manifest: {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut entries = Vec::new();
    let mut malformed_lines = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read manifest: {}", path.display()))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match serde_json::from_str::<ManifestEntry>(trimmed) {
            Ok(entry) if !entry.url.trim().is_empty() => entries.push(entry),
            Ok(_) => {
                tracing::warn!(line = idx + 1, "manifest entry has empty url, skipping");
                malformed_lines += 1;
            }
            Err(e) => {
                tracing::warn!(line = idx + 1, error = %e, "malformed manifest line, skipping");
                malformed_lines += 1;
            }
        }
    }

    Ok(Manifest {
        entries,
        malformed_lines,
    })
}
